//! 页面规则操作参数

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::core::options::{RequiredFields, call_options};
use crate::core::request::RequestBuilder;
use crate::error::Result;
use crate::traits::Operation;

use super::actions::PageRuleAction;
use super::types::{
    PageRulesDeleteResponse, PageRulesResponseListAll, PageRulesResponseWithoutResultInfo,
    TargetsItem,
};
use super::{PAGE_RULE_PATH, PAGE_RULES_PATH};

/// 列出 zone 下的页面规则
#[derive(Debug, Clone, Default)]
pub struct ListPageRulesOptions {
    /// `active` / `disabled`
    pub status: Option<String>,
    /// `status` / `priority`
    pub order: Option<String>,
    /// `asc` / `desc`
    pub direction: Option<String>,
    /// `any` / `all`
    pub match_: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl ListPageRulesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    #[must_use]
    pub fn with_match(mut self, match_: impl Into<String>) -> Self {
        self.match_ = Some(match_.into());
        self
    }
}

impl Operation for ListPageRulesOptions {
    type Output = PageRulesResponseListAll;
    const NAME: &'static str = "list_page_rules";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(PAGE_RULES_PATH)
            .query("status", self.status.as_deref())
            .query("order", self.order.as_deref())
            .query("direction", self.direction.as_deref())
            .query("match", self.match_.as_deref()))
    }
}

/// 创建页面规则
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePageRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetsItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<PageRuleAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl CreatePageRuleOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operation for CreatePageRuleOptions {
    type Output = PageRulesResponseWithoutResultInfo;
    const NAME: &'static str = "create_page_rule";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::post(PAGE_RULES_PATH).json_body(self)
    }
}

/// 获取页面规则
#[derive(Debug, Clone, Default)]
pub struct GetPageRuleOptions {
    pub rule_id: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl GetPageRuleOptions {
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            ..Self::default()
        }
    }
}

impl Operation for GetPageRuleOptions {
    type Output = PageRulesResponseWithoutResultInfo;
    const NAME: &'static str = "get_page_rule";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("rule_id", &self.rule_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(PAGE_RULE_PATH).path_param("rule_id", self.rule_id.clone()))
    }
}

/// 修改页面规则（PATCH，只修改提供的字段）
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangePageRuleOptions {
    #[serde(skip)]
    pub rule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetsItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<PageRuleAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl ChangePageRuleOptions {
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            ..Self::default()
        }
    }
}

impl Operation for ChangePageRuleOptions {
    type Output = PageRulesResponseWithoutResultInfo;
    const NAME: &'static str = "change_page_rule";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("rule_id", &self.rule_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::patch(PAGE_RULE_PATH)
            .path_param("rule_id", self.rule_id.clone())
            .json_body(self)
    }
}

/// 替换页面规则（PUT）
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePageRuleOptions {
    #[serde(skip)]
    pub rule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetsItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<PageRuleAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl UpdatePageRuleOptions {
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            ..Self::default()
        }
    }
}

impl Operation for UpdatePageRuleOptions {
    type Output = PageRulesResponseWithoutResultInfo;
    const NAME: &'static str = "update_page_rule";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("rule_id", &self.rule_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::put(PAGE_RULE_PATH)
            .path_param("rule_id", self.rule_id.clone())
            .json_body(self)
    }
}

/// 删除页面规则
#[derive(Debug, Clone, Default)]
pub struct DeletePageRuleOptions {
    pub rule_id: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl DeletePageRuleOptions {
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            ..Self::default()
        }
    }
}

impl Operation for DeletePageRuleOptions {
    type Output = PageRulesDeleteResponse;
    const NAME: &'static str = "delete_page_rule";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("rule_id", &self.rule_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::delete(PAGE_RULE_PATH).path_param("rule_id", self.rule_id.clone()))
    }
}

/// 规则内容的 setter（create / change / update 共用）
macro_rules! rule_body_setters {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $options {
                #[must_use]
                pub fn with_targets(mut self, targets: Vec<TargetsItem>) -> Self {
                    self.targets = Some(targets);
                    self
                }

                #[must_use]
                pub fn with_actions(mut self, actions: Vec<PageRuleAction>) -> Self {
                    self.actions = Some(actions);
                    self
                }

                #[must_use]
                pub fn with_priority(mut self, priority: i64) -> Self {
                    self.priority = Some(priority);
                    self
                }

                #[must_use]
                pub fn with_status(mut self, status: impl Into<String>) -> Self {
                    self.status = Some(status.into());
                    self
                }
            }
        )+
    };
}

rule_body_setters!(CreatePageRuleOptions, ChangePageRuleOptions, UpdatePageRuleOptions);

call_options!(
    ListPageRulesOptions,
    CreatePageRuleOptions,
    GetPageRuleOptions,
    ChangePageRuleOptions,
    UpdatePageRuleOptions,
    DeletePageRuleOptions,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::RequestBody;
    use crate::services::page_rules::ForwardingUrl;
    use serde_json::json;

    fn scope() -> Vec<(&'static str, String)> {
        vec![("crn", "crn:v1".to_string()), ("zone_id", "zone-1".to_string())]
    }

    #[test]
    fn test_list_query_in_declared_order() {
        let request = ListPageRulesOptions::new()
            .with_match("all")
            .with_status("active")
            .with_direction("desc")
            .build_request()
            .unwrap()
            .scope(&scope())
            .build("https://api.example.com")
            .unwrap();

        assert_eq!(request.url, "https://api.example.com/v1/crn%3Av1/zones/zone-1/pagerules");
        assert_eq!(
            request.query,
            vec![
                ("status".to_string(), "active".to_string()),
                ("direction".to_string(), "desc".to_string()),
                ("match".to_string(), "all".to_string()),
            ]
        );
    }

    #[test]
    fn test_change_body_keeps_zero_priority() {
        let request = ChangePageRuleOptions::new("rule-1")
            .with_priority(0)
            .with_actions(vec![PageRuleAction::ForwardingUrl(ForwardingUrl {
                url: "https://example.com".to_string(),
                status_code: 302,
            })])
            .build_request()
            .unwrap()
            .scope(&scope())
            .build("https://api.example.com")
            .unwrap();

        assert_eq!(request.method, reqwest::Method::PATCH);
        assert_eq!(
            request.url,
            "https://api.example.com/v1/crn%3Av1/zones/zone-1/pagerules/rule-1"
        );
        assert_eq!(
            request.body,
            RequestBody::Json(json!({
                "actions": [{"id": "forwarding_url", "value": {"url": "https://example.com", "status_code": 302}}],
                "priority": 0
            }))
        );
    }

    #[test]
    fn test_create_targets_shape() {
        let body = serde_json::to_value(
            CreatePageRuleOptions::new()
                .with_targets(vec![TargetsItem::url_matches("*example.com/images/*")])
                .with_status("active"),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({
                "targets": [{"target": "url", "constraint": {"operator": "matches", "value": "*example.com/images/*"}}],
                "status": "active"
            })
        );
    }

    #[test]
    fn test_rule_id_required() {
        assert!(GetPageRuleOptions::new("").validate().is_err());
        assert!(GetPageRuleOptions::new(" ").validate().is_ok());
        assert!(UpdatePageRuleOptions::default().validate().is_err());
        assert!(DeletePageRuleOptions::new("testString").validate().is_ok());
    }
}
