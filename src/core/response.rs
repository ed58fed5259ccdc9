//! 响应解析
//!
//! 所有 JSON 接口共用 `{success, errors, messages, result}` 信封。
//! 约定：
//! - 状态码 >= 300：优先解析结构化错误，失败则返回带原始响应的网络错误
//! - 2xx 且 body 为空：`result` 为 `None`，不是错误
//! - 解析失败时原始响应始终随错误一起返回

use std::borrow::Cow;
use std::fmt;

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SdkError};
use crate::http_client::HttpUtils;

/// 传输层收到的原始响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status_code: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Content-Type 是否为 JSON（含 `+json` 后缀类型）
    pub fn is_json(&self) -> bool {
        self.content_type().is_some_and(is_json_mime)
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

fn is_json_mime(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// 操作对响应内容类型的要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// 必须是 JSON，其他内容类型视为解析错误
    Json,
    /// JSON 时解析，其他内容类型保留原始 body，不报错
    Lenient,
    /// 二进制下载，body 原样返回
    Binary,
}

/// 从原始响应构造结果类型
pub trait FromRawResponse: Sized {
    fn from_raw(raw: &RawResponse) -> std::result::Result<Self, String>;
}

impl<T: DeserializeOwned> FromRawResponse for Envelope<T> {
    fn from_raw(raw: &RawResponse) -> std::result::Result<Self, String> {
        HttpUtils::parse_json(&raw.body)
    }
}

impl FromRawResponse for Vec<u8> {
    fn from_raw(raw: &RawResponse) -> std::result::Result<Self, String> {
        Ok(raw.body.clone())
    }
}

/// 操作结果：解析后的结果 + 原始响应
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// body 为空（或宽松模式下非 JSON）时为 `None`
    pub result: Option<T>,
    pub raw: RawResponse,
}

impl<T> DetailedResponse<T> {
    pub fn status_code(&self) -> u16 {
        self.raw.status_code
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.raw.header(name)
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }
}

/// 通用响应信封
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<ResponseMessage>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<ResponseMessage>,
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

/// 分页信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub per_page: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub total_count: i64,
}

/// `errors` / `messages` 数组的元素
///
/// 各接口格式不统一：对象、字符串、字符串数组都出现过，这里统一收敛。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl<'de> Deserialize<'de> for ResponseMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Self::from_value(Value::deserialize(deserializer)?))
    }
}

impl ResponseMessage {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                code: map.get("code").and_then(|c| match c {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.parse().ok(),
                    _ => None,
                }),
                message: map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(ToString::to_string),
                id: map.get("id").and_then(Value::as_str).map(ToString::to_string),
            },
            Value::String(message) => Self {
                message: Some(message),
                ..Self::default()
            },
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                    .collect();
                Self {
                    message: Some(parts.join(" ")),
                    ..Self::default()
                }
            }
            Value::Null => Self::default(),
            other => Self {
                message: Some(other.to_string()),
                ..Self::default()
            },
        }
    }
}

impl fmt::Display for ResponseMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message, &self.id) {
            (Some(code), Some(message), _) => write!(f, "[{code}] {message}"),
            (None, Some(message), _) => f.write_str(message),
            (Some(code), None, _) => write!(f, "[{code}]"),
            (None, None, Some(id)) => f.write_str(id),
            (None, None, None) => f.write_str("-"),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// 解析响应
pub fn decode<T: FromRawResponse>(
    raw: RawResponse,
    kind: ResponseKind,
) -> Result<DetailedResponse<T>> {
    if !raw.is_success() {
        return Err(failure(raw));
    }

    if raw.body.is_empty() {
        return Ok(DetailedResponse { result: None, raw });
    }

    match kind {
        ResponseKind::Binary => {}
        ResponseKind::Json => {
            if let Some(content_type) = raw.content_type() {
                if !is_json_mime(content_type) {
                    let detail = format!("期望 JSON 响应，实际 Content-Type: {content_type}");
                    return Err(SdkError::Unmarshal {
                        detail,
                        response: Box::new(raw),
                    });
                }
            }
        }
        ResponseKind::Lenient => {
            if raw.content_type().is_some_and(|ct| !is_json_mime(ct)) {
                log::debug!("非 JSON 响应，保留原始 body ({} bytes)", raw.body.len());
                return Ok(DetailedResponse { result: None, raw });
            }
        }
    }

    match T::from_raw(&raw) {
        Ok(result) => Ok(DetailedResponse {
            result: Some(result),
            raw,
        }),
        Err(detail) => Err(SdkError::Unmarshal {
            detail,
            response: Box::new(raw),
        }),
    }
}

/// 非 2xx 响应转换为错误
fn failure(raw: RawResponse) -> SdkError {
    let status = raw.status_code;
    if let Ok(envelope) = serde_json::from_slice::<Envelope<Value>>(&raw.body) {
        if !envelope.errors.is_empty() {
            log::error!("API 错误 (HTTP {status}): {:?}", envelope.errors);
            return SdkError::Api {
                status,
                errors: envelope.errors,
                response: Box::new(raw),
            };
        }
    }

    SdkError::Transport {
        detail: format!("HTTP {status}: {}", raw.text()),
        response: Some(Box::new(raw)),
    }
}
