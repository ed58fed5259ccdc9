//! 页面规则 API 类型定义

use serde::{Deserialize, Serialize};

use crate::core::response::Envelope;

use super::actions::PageRuleAction;

/// 匹配条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetsItemConstraint {
    /// 目前只有 `matches`
    pub operator: String,
    /// URL 模式，例如 `*example.com/images/*`
    pub value: String,
}

/// 匹配目标
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetsItem {
    /// 目前只有 `url`
    pub target: String,
    pub constraint: TargetsItemConstraint,
}

impl TargetsItem {
    /// 按 URL 模式匹配
    pub fn url_matches(pattern: impl Into<String>) -> Self {
        Self {
            target: "url".to_string(),
            constraint: TargetsItemConstraint {
                operator: "matches".to_string(),
                value: pattern.into(),
            },
        }
    }
}

/// 页面规则
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRuleResult {
    pub id: String,
    #[serde(default)]
    pub targets: Vec<TargetsItem>,
    #[serde(default)]
    pub actions: Vec<PageRuleAction>,
    #[serde(default)]
    pub priority: i64,
    /// `active` / `disabled`
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRuleId {
    pub id: String,
}

pub type PageRulesResponseListAll = Envelope<Vec<PageRuleResult>>;
pub type PageRulesResponseWithoutResultInfo = Envelope<PageRuleResult>;
pub type PageRulesDeleteResponse = Envelope<PageRuleId>;
