//! 告警策略 API 类型定义

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::response::Envelope;

/// 通知目标（邮件地址或 webhook ID）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MechanismTarget {
    pub id: String,
}

impl MechanismTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// 通知方式
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mechanisms {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<MechanismTarget>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webhooks: Vec<MechanismTarget>,
}

/// 告警策略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertPolicy {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub alert_type: String,
    #[serde(default)]
    pub mechanisms: Mechanisms,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// 告警条件（结构由服务端定义）
    #[serde(default)]
    pub conditions: Map<String, Value>,
    /// 过滤条件（结构由服务端定义）
    #[serde(default)]
    pub filters: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPolicyId {
    pub id: String,
}

pub type ListAlertPoliciesResp = Envelope<Vec<AlertPolicy>>;
pub type GetAlertPolicyResp = Envelope<AlertPolicy>;
pub type AlertSuccessResp = Envelope<AlertPolicyId>;
