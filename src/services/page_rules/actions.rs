//! 页面规则动作
//!
//! 动作是按 `id` 区分的联合类型，不同 `id` 的 `value` 结构不同。
//! 解析时先读 `id`，再按 `id` 解析 `value`；未知 `id` 落到
//! [`PageRuleAction::Other`]，不会报错。

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DISABLE_SECURITY: &str = "disable_security";
pub const ALWAYS_USE_HTTPS: &str = "always_use_https";
pub const CACHE_LEVEL: &str = "cache_level";
pub const FORWARDING_URL: &str = "forwarding_url";
pub const BROWSER_CACHE_TTL: &str = "browser_cache_ttl";
pub const SECURITY_LEVEL: &str = "security_level";
pub const BROWSER_CHECK: &str = "browser_check";
pub const BYPASS_CACHE_ON_COOKIE: &str = "bypass_cache_on_cookie";
pub const SSL: &str = "ssl";

/// 转发目标
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingUrl {
    pub url: String,
    /// 301 或 302
    pub status_code: i64,
}

/// 页面规则动作
#[derive(Debug, Clone, PartialEq)]
pub enum PageRuleAction {
    DisableSecurity(Option<Value>),
    AlwaysUseHttps(Option<Value>),
    /// `bypass` / `basic` / `simplified` / `aggressive` / `cache_everything`
    CacheLevel(String),
    ForwardingUrl(ForwardingUrl),
    /// 秒
    BrowserCacheTtl(i64),
    /// `off` / `essentially_off` / `low` / `medium` / `high` / `under_attack`
    SecurityLevel(String),
    /// `on` / `off`
    BrowserCheck(String),
    /// cookie 名正则
    BypassCacheOnCookie(String),
    /// `off` / `flexible` / `full` / `strict` / `origin_pull`
    Ssl(String),
    /// 尚未建模的动作，原样保留
    Other { id: String, value: Option<Value> },
}

impl PageRuleAction {
    pub fn id(&self) -> &str {
        match self {
            Self::DisableSecurity(_) => DISABLE_SECURITY,
            Self::AlwaysUseHttps(_) => ALWAYS_USE_HTTPS,
            Self::CacheLevel(_) => CACHE_LEVEL,
            Self::ForwardingUrl(_) => FORWARDING_URL,
            Self::BrowserCacheTtl(_) => BROWSER_CACHE_TTL,
            Self::SecurityLevel(_) => SECURITY_LEVEL,
            Self::BrowserCheck(_) => BROWSER_CHECK,
            Self::BypassCacheOnCookie(_) => BYPASS_CACHE_ON_COOKIE,
            Self::Ssl(_) => SSL,
            Self::Other { id, .. } => id,
        }
    }

    /// `value` 的 JSON 形式
    pub fn value(&self) -> Option<Value> {
        match self {
            Self::DisableSecurity(value) | Self::AlwaysUseHttps(value) => value.clone(),
            Self::CacheLevel(v)
            | Self::SecurityLevel(v)
            | Self::BrowserCheck(v)
            | Self::BypassCacheOnCookie(v)
            | Self::Ssl(v) => Some(Value::String(v.clone())),
            Self::ForwardingUrl(target) => serde_json::to_value(target).ok(),
            Self::BrowserCacheTtl(ttl) => Some(Value::from(*ttl)),
            Self::Other { value, .. } => value.clone(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other { .. })
    }

    /// 按 `id` 分派解析
    fn from_parts(id: String, value: Option<Value>) -> Result<Self, String> {
        let action = match id.as_str() {
            DISABLE_SECURITY => Self::DisableSecurity(value),
            ALWAYS_USE_HTTPS => Self::AlwaysUseHttps(value),
            CACHE_LEVEL => Self::CacheLevel(payload(&id, value)?),
            FORWARDING_URL => Self::ForwardingUrl(payload(&id, value)?),
            BROWSER_CACHE_TTL => Self::BrowserCacheTtl(payload(&id, value)?),
            SECURITY_LEVEL => Self::SecurityLevel(payload(&id, value)?),
            BROWSER_CHECK => Self::BrowserCheck(payload(&id, value)?),
            BYPASS_CACHE_ON_COOKIE => Self::BypassCacheOnCookie(payload(&id, value)?),
            SSL => Self::Ssl(payload(&id, value)?),
            _ => {
                log::debug!("未知页面规则动作: {id}");
                Self::Other { id, value }
            }
        };
        Ok(action)
    }
}

fn payload<T: DeserializeOwned>(id: &str, value: Option<Value>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("动作 {id} 缺少 value"))?;
    serde_json::from_value(value).map_err(|e| format!("动作 {id} 的 value 无效: {e}"))
}

impl Serialize for PageRuleAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.value();
        let mut map = serializer.serialize_map(Some(if value.is_some() { 2 } else { 1 }))?;
        map.serialize_entry("id", self.id())?;
        if let Some(value) = value {
            map.serialize_entry("value", &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PageRuleAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;
        let id = match object.remove("id") {
            Some(Value::String(id)) => id,
            Some(other) => {
                return Err(de::Error::custom(format!("动作 id 不是字符串: {other}")));
            }
            None => return Err(de::Error::missing_field("id")),
        };
        let value = object.remove("value").filter(|v| !v.is_null());
        Self::from_parts(id, value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_actions_dispatch_on_id() {
        let actions: Vec<PageRuleAction> = serde_json::from_value(json!([
            {"id": "disable_security", "value": {"reason": "maintenance"}},
            {"id": "always_use_https"},
            {"id": "cache_level", "value": "aggressive"},
            {"id": "forwarding_url", "value": {"url": "https://example.com/new", "status_code": 301}},
            {"id": "browser_cache_ttl", "value": 14400},
            {"id": "security_level", "value": "high"},
            {"id": "browser_check", "value": "on"},
            {"id": "bypass_cache_on_cookie", "value": "session.*"},
            {"id": "ssl", "value": "strict"}
        ]))
        .unwrap();

        assert_eq!(
            actions,
            vec![
                PageRuleAction::DisableSecurity(Some(json!({"reason": "maintenance"}))),
                PageRuleAction::AlwaysUseHttps(None),
                PageRuleAction::CacheLevel("aggressive".to_string()),
                PageRuleAction::ForwardingUrl(ForwardingUrl {
                    url: "https://example.com/new".to_string(),
                    status_code: 301,
                }),
                PageRuleAction::BrowserCacheTtl(14400),
                PageRuleAction::SecurityLevel("high".to_string()),
                PageRuleAction::BrowserCheck("on".to_string()),
                PageRuleAction::BypassCacheOnCookie("session.*".to_string()),
                PageRuleAction::Ssl("strict".to_string()),
            ]
        );
        assert!(actions.iter().all(PageRuleAction::is_known));
    }

    #[test]
    fn test_unknown_id_falls_back() {
        let action: PageRuleAction = serde_json::from_value(json!({
            "id": "unknown_future_action",
            "value": {"nested": [1, 2, {"deep": true}]}
        }))
        .unwrap();

        assert_eq!(
            action,
            PageRuleAction::Other {
                id: "unknown_future_action".to_string(),
                value: Some(json!({"nested": [1, 2, {"deep": true}]})),
            }
        );
        assert_eq!(action.id(), "unknown_future_action");
        assert!(!action.is_known());
    }

    #[test]
    fn test_serialize_shape() {
        assert_eq!(
            serde_json::to_value(PageRuleAction::BrowserCacheTtl(0)).unwrap(),
            json!({"id": "browser_cache_ttl", "value": 0})
        );
        assert_eq!(
            serde_json::to_value(PageRuleAction::AlwaysUseHttps(None)).unwrap(),
            json!({"id": "always_use_https"})
        );
    }

    #[test]
    fn test_malformed_known_value_is_error() {
        let result: Result<PageRuleAction, _> =
            serde_json::from_value(json!({"id": "browser_cache_ttl", "value": "forever"}));
        assert!(result.is_err());

        let result: Result<PageRuleAction, _> = serde_json::from_value(json!({"value": 1}));
        assert!(result.is_err());
    }
}
