//! 边缘函数 API 类型定义

use serde::{Deserialize, Serialize};

use crate::core::response::Envelope;

/// 边缘函数脚本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFunctionsAction {
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub etag: String,
    #[serde(default)]
    pub handlers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub routes: Vec<EdgeFunctionsTrigger>,
}

/// 触发器（URL 模式 -> 脚本）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFunctionsTrigger {
    pub id: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default)]
    pub request_limit_fail_open: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerId {
    pub id: String,
}

pub type ListEdgeFunctionsActionsResp = Envelope<Vec<EdgeFunctionsAction>>;
pub type EdgeFunctionsActionResp = Envelope<EdgeFunctionsAction>;
pub type CreateEdgeFunctionsTriggerResp = Envelope<TriggerId>;
pub type ListEdgeFunctionsTriggersResp = Envelope<Vec<EdgeFunctionsTrigger>>;
pub type GetEdgeFunctionsTriggerResp = Envelope<EdgeFunctionsTrigger>;
