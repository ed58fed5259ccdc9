//! 告警策略操作参数

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::options::{RequiredFields, call_options};
use crate::core::request::RequestBuilder;
use crate::error::Result;
use crate::traits::Operation;

use super::types::{AlertSuccessResp, GetAlertPolicyResp, ListAlertPoliciesResp, Mechanisms};
use super::{ALERT_POLICIES_PATH, ALERT_POLICY_PATH};

/// 列出所有告警策略
#[derive(Debug, Clone, Default)]
pub struct GetAlertPoliciesOptions {
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl GetAlertPoliciesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operation for GetAlertPoliciesOptions {
    type Output = ListAlertPoliciesResp;
    const NAME: &'static str = "get_alert_policies";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(ALERT_POLICIES_PATH))
    }
}

/// 创建告警策略
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAlertPolicyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanisms: Option<Mechanisms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Map<String, Value>>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl CreateAlertPolicyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_alert_type(mut self, alert_type: impl Into<String>) -> Self {
        self.alert_type = Some(alert_type.into());
        self
    }

    #[must_use]
    pub fn with_mechanisms(mut self, mechanisms: Mechanisms) -> Self {
        self.mechanisms = Some(mechanisms);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_conditions(mut self, conditions: Map<String, Value>) -> Self {
        self.conditions = Some(conditions);
        self
    }

    #[must_use]
    pub fn with_filters(mut self, filters: Map<String, Value>) -> Self {
        self.filters = Some(filters);
        self
    }
}

impl Operation for CreateAlertPolicyOptions {
    type Output = AlertSuccessResp;
    const NAME: &'static str = "create_alert_policy";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::post(ALERT_POLICIES_PATH).json_body(self)
    }
}

/// 获取单个告警策略
#[derive(Debug, Clone, Default)]
pub struct GetAlertPolicyOptions {
    pub policy_id: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl GetAlertPolicyOptions {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            ..Self::default()
        }
    }
}

impl Operation for GetAlertPolicyOptions {
    type Output = GetAlertPolicyResp;
    const NAME: &'static str = "get_alert_policy";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("policy_id", &self.policy_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(ALERT_POLICY_PATH).path_param("policy_id", self.policy_id.clone()))
    }
}

/// 更新告警策略
///
/// 只有设置过的字段会出现在请求体中。
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAlertPolicyOptions {
    #[serde(skip)]
    pub policy_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanisms: Option<Mechanisms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl UpdateAlertPolicyOptions {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_alert_type(mut self, alert_type: impl Into<String>) -> Self {
        self.alert_type = Some(alert_type.into());
        self
    }

    #[must_use]
    pub fn with_mechanisms(mut self, mechanisms: Mechanisms) -> Self {
        self.mechanisms = Some(mechanisms);
        self
    }

    #[must_use]
    pub fn with_conditions(mut self, conditions: Map<String, Value>) -> Self {
        self.conditions = Some(conditions);
        self
    }

    #[must_use]
    pub fn with_filters(mut self, filters: Map<String, Value>) -> Self {
        self.filters = Some(filters);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Operation for UpdateAlertPolicyOptions {
    type Output = AlertSuccessResp;
    const NAME: &'static str = "update_alert_policy";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("policy_id", &self.policy_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::put(ALERT_POLICY_PATH)
            .path_param("policy_id", self.policy_id.clone())
            .json_body(self)
    }
}

/// 删除告警策略
#[derive(Debug, Clone, Default)]
pub struct DeleteAlertPolicyOptions {
    pub policy_id: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl DeleteAlertPolicyOptions {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            ..Self::default()
        }
    }
}

impl Operation for DeleteAlertPolicyOptions {
    type Output = AlertSuccessResp;
    const NAME: &'static str = "delete_alert_policy";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("policy_id", &self.policy_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::delete(ALERT_POLICY_PATH)
            .path_param("policy_id", self.policy_id.clone()))
    }
}

call_options!(
    GetAlertPoliciesOptions,
    CreateAlertPolicyOptions,
    GetAlertPolicyOptions,
    UpdateAlertPolicyOptions,
    DeleteAlertPolicyOptions,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::RequestBody;
    use crate::error::SdkError;
    use crate::services::alerts::MechanismTarget;
    use serde_json::json;

    #[test]
    fn test_update_body_omits_unset_fields() {
        let options = UpdateAlertPolicyOptions::new("f0413b106d2c4aa9b1553d3d5d7c8f0a")
            .with_enabled(false)
            .with_description("");

        let request = options
            .build_request()
            .unwrap()
            .scope(&[("crn", "crn:v1".to_string())])
            .build("https://api.example.com")
            .unwrap();

        assert_eq!(
            request.url,
            "https://api.example.com/v1/crn%3Av1/alerting/policies/f0413b106d2c4aa9b1553d3d5d7c8f0a"
        );
        assert_eq!(request.method, reqwest::Method::PUT);
        assert_eq!(
            request.body,
            RequestBody::Json(json!({"enabled": false, "description": ""}))
        );
    }

    #[test]
    fn test_create_body_with_open_maps() {
        let mut conditions = Map::new();
        conditions.insert("dos_action".to_string(), json!(["ddos_mitigation"]));
        let mut filters = Map::new();
        filters.insert("enabled".to_string(), json!({"in": [true, false]}));

        let options = CreateAlertPolicyOptions::new()
            .with_name("My Alert Policy")
            .with_enabled(true)
            .with_alert_type("dos_attack_l7")
            .with_mechanisms(Mechanisms {
                email: vec![MechanismTarget::new("mynotifications@email.com")],
                webhooks: vec![],
            })
            .with_conditions(conditions)
            .with_filters(filters);

        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "My Alert Policy",
                "enabled": true,
                "alert_type": "dos_attack_l7",
                "mechanisms": {"email": [{"id": "mynotifications@email.com"}]},
                "conditions": {"dos_action": ["ddos_mitigation"]},
                "filters": {"enabled": {"in": [true, false]}}
            })
        );
    }

    #[test]
    fn test_empty_policy_id_fails_validation() {
        let err = UpdateAlertPolicyOptions::new("").validate().unwrap_err();
        match err {
            SdkError::Validation { operation, missing } => {
                assert_eq!(operation, "update_alert_policy");
                assert_eq!(missing, vec!["policy_id"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(DeleteAlertPolicyOptions::default().validate().is_err());
        assert!(GetAlertPolicyOptions::new("id").validate().is_ok());
    }
}
