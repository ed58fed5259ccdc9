//! 限速规则 API 类型定义

use serde::{Deserialize, Serialize};

use crate::core::response::Envelope;

/// 不受限速影响的 URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitInputBypassItem {
    /// 目前只有 `url`
    pub name: String,
    pub value: String,
}

/// 计数关联方式
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitInputCorrelate {
    /// 目前只有 `nat`
    pub by: String,
}

/// 自定义阻断响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitInputActionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// 超过阈值后的动作
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitInputAction {
    /// `simulate` / `ban` / `challenge` / `js_challenge`
    pub mode: String,
    /// 秒；`mode` 为 `simulate` 或 `ban` 时有效
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<RatelimitInputActionResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitInputMatchRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitInputMatchResponseHeadersItem {
    pub name: String,
    /// `eq` / `ne`
    pub op: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitInputMatchResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<RatelimitInputMatchResponseHeadersItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_traffic: Option<bool>,
}

/// 计入阈值的请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitInputMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RatelimitInputMatchRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<RatelimitInputMatchResponse>,
}

/// 限速规则
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitObject {
    pub id: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bypass: Vec<RatelimitInputBypassItem>,
    #[serde(default)]
    pub threshold: i64,
    /// 秒
    #[serde(default)]
    pub period: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlate: Option<RatelimitInputCorrelate>,
    #[serde(default)]
    pub action: RatelimitInputAction,
    #[serde(default, rename = "match")]
    pub match_: RatelimitInputMatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatelimitId {
    pub id: String,
}

pub type ListRatelimitResp = Envelope<Vec<RatelimitObject>>;
pub type RatelimitResp = Envelope<RatelimitObject>;
pub type DeleteRateLimitResp = Envelope<RatelimitId>;
