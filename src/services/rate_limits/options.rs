//! 限速规则操作参数

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::core::options::{RequiredFields, call_options};
use crate::core::request::RequestBuilder;
use crate::error::Result;
use crate::traits::Operation;

use super::types::{
    DeleteRateLimitResp, ListRatelimitResp, RatelimitInputAction, RatelimitInputBypassItem,
    RatelimitInputCorrelate, RatelimitInputMatch, RatelimitResp,
};
use super::{RATE_LIMIT_PATH, RATE_LIMITS_PATH};

/// 分页列出 zone 下的限速规则
#[derive(Debug, Clone, Default)]
pub struct ListAllZoneRateLimitsOptions {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl ListAllZoneRateLimitsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

impl Operation for ListAllZoneRateLimitsOptions {
    type Output = ListRatelimitResp;
    const NAME: &'static str = "list_all_zone_rate_limits";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(RATE_LIMITS_PATH)
            .query("page", self.page)
            .query("per_page", self.per_page))
    }
}

/// 创建限速规则
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateZoneRateLimitsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<Vec<RatelimitInputBypassItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RatelimitInputAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlate: Option<RatelimitInputCorrelate>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_: Option<RatelimitInputMatch>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl CreateZoneRateLimitsOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operation for CreateZoneRateLimitsOptions {
    type Output = RatelimitResp;
    const NAME: &'static str = "create_zone_rate_limits";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::post(RATE_LIMITS_PATH).json_body(self)
    }
}

/// 获取限速规则
#[derive(Debug, Clone, Default)]
pub struct GetRateLimitOptions {
    pub rate_limit_identifier: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl GetRateLimitOptions {
    pub fn new(rate_limit_identifier: impl Into<String>) -> Self {
        Self {
            rate_limit_identifier: rate_limit_identifier.into(),
            ..Self::default()
        }
    }
}

impl Operation for GetRateLimitOptions {
    type Output = RatelimitResp;
    const NAME: &'static str = "get_rate_limit";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("rate_limit_identifier", &self.rate_limit_identifier)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(RATE_LIMIT_PATH)
            .path_param("rate_limit_identifier", self.rate_limit_identifier.clone()))
    }
}

/// 更新限速规则
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRateLimitOptions {
    #[serde(skip)]
    pub rate_limit_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<Vec<RatelimitInputBypassItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RatelimitInputAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlate: Option<RatelimitInputCorrelate>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_: Option<RatelimitInputMatch>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl UpdateRateLimitOptions {
    pub fn new(rate_limit_identifier: impl Into<String>) -> Self {
        Self {
            rate_limit_identifier: rate_limit_identifier.into(),
            ..Self::default()
        }
    }
}

impl Operation for UpdateRateLimitOptions {
    type Output = RatelimitResp;
    const NAME: &'static str = "update_rate_limit";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("rate_limit_identifier", &self.rate_limit_identifier)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::put(RATE_LIMIT_PATH)
            .path_param("rate_limit_identifier", self.rate_limit_identifier.clone())
            .json_body(self)
    }
}

/// 删除限速规则
#[derive(Debug, Clone, Default)]
pub struct DeleteZoneRateLimitOptions {
    pub rate_limit_identifier: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl DeleteZoneRateLimitOptions {
    pub fn new(rate_limit_identifier: impl Into<String>) -> Self {
        Self {
            rate_limit_identifier: rate_limit_identifier.into(),
            ..Self::default()
        }
    }
}

impl Operation for DeleteZoneRateLimitOptions {
    type Output = DeleteRateLimitResp;
    const NAME: &'static str = "delete_zone_rate_limit";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("rate_limit_identifier", &self.rate_limit_identifier)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::delete(RATE_LIMIT_PATH)
            .path_param("rate_limit_identifier", self.rate_limit_identifier.clone()))
    }
}

/// 规则内容的 setter（create / update 共用）
macro_rules! rate_limit_body_setters {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $options {
                #[must_use]
                pub fn with_disabled(mut self, disabled: bool) -> Self {
                    self.disabled = Some(disabled);
                    self
                }

                #[must_use]
                pub fn with_description(mut self, description: impl Into<String>) -> Self {
                    self.description = Some(description.into());
                    self
                }

                #[must_use]
                pub fn with_bypass(mut self, bypass: Vec<RatelimitInputBypassItem>) -> Self {
                    self.bypass = Some(bypass);
                    self
                }

                #[must_use]
                pub fn with_threshold(mut self, threshold: i64) -> Self {
                    self.threshold = Some(threshold);
                    self
                }

                #[must_use]
                pub fn with_period(mut self, period: i64) -> Self {
                    self.period = Some(period);
                    self
                }

                #[must_use]
                pub fn with_action(mut self, action: RatelimitInputAction) -> Self {
                    self.action = Some(action);
                    self
                }

                #[must_use]
                pub fn with_correlate(mut self, correlate: RatelimitInputCorrelate) -> Self {
                    self.correlate = Some(correlate);
                    self
                }

                #[must_use]
                pub fn with_match(mut self, match_: RatelimitInputMatch) -> Self {
                    self.match_ = Some(match_);
                    self
                }
            }
        )+
    };
}

rate_limit_body_setters!(CreateZoneRateLimitsOptions, UpdateRateLimitOptions);

call_options!(
    ListAllZoneRateLimitsOptions,
    CreateZoneRateLimitsOptions,
    GetRateLimitOptions,
    UpdateRateLimitOptions,
    DeleteZoneRateLimitOptions,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::RequestBody;
    use crate::services::rate_limits::{RatelimitInputMatchRequest, RatelimitInputMatchResponse};
    use serde_json::json;

    fn scope() -> Vec<(&'static str, String)> {
        vec![
            ("crn", "crn:v1".to_string()),
            ("zone_identifier", "zone-1".to_string()),
        ]
    }

    #[test]
    fn test_list_paging_query() {
        let request = ListAllZoneRateLimitsOptions::new()
            .with_per_page(50)
            .with_page(2)
            .build_request()
            .unwrap()
            .scope(&scope())
            .build("https://api.example.com")
            .unwrap();

        assert_eq!(
            request.url,
            "https://api.example.com/v1/crn%3Av1/zones/zone-1/rate_limits"
        );
        assert_eq!(
            request.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_without_paging_has_no_query() {
        let request = ListAllZoneRateLimitsOptions::new()
            .build_request()
            .unwrap()
            .scope(&scope())
            .build("https://api.example.com")
            .unwrap();
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_create_body_uses_match_key() {
        let options = CreateZoneRateLimitsOptions::new()
            .with_disabled(false)
            .with_threshold(1000)
            .with_period(60)
            .with_action(RatelimitInputAction {
                mode: "simulate".to_string(),
                timeout: Some(60),
                response: None,
            })
            .with_correlate(RatelimitInputCorrelate {
                by: "nat".to_string(),
            })
            .with_match(RatelimitInputMatch {
                request: Some(RatelimitInputMatchRequest {
                    methods: vec!["GET".to_string()],
                    schemes: vec!["HTTPS".to_string()],
                    url: Some("*.example.org/path*".to_string()),
                }),
                response: Some(RatelimitInputMatchResponse {
                    status: vec![403],
                    headers: vec![],
                    origin_traffic: Some(false),
                }),
            });

        let request = options
            .build_request()
            .unwrap()
            .scope(&scope())
            .build("https://api.example.com")
            .unwrap();

        assert_eq!(
            request.body,
            RequestBody::Json(json!({
                "disabled": false,
                "threshold": 1000,
                "period": 60,
                "action": {"mode": "simulate", "timeout": 60},
                "correlate": {"by": "nat"},
                "match": {
                    "request": {"methods": ["GET"], "schemes": ["HTTPS"], "url": "*.example.org/path*"},
                    "response": {"status": [403], "origin_traffic": false}
                }
            }))
        );
    }

    #[test]
    fn test_identifier_required() {
        assert!(GetRateLimitOptions::new("").validate().is_err());
        assert!(UpdateRateLimitOptions::new("").validate().is_err());
        assert!(DeleteZoneRateLimitOptions::new("rl-1").validate().is_ok());
    }
}
