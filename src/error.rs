//! SDK 错误类型

use thiserror::Error;

use crate::core::response::{RawResponse, ResponseMessage};
use crate::http_client::HttpUtils;

/// 服务 URL 为空时的错误标记
pub const SERVICE_URL_MISSING: &str = "service URL is empty";

/// 超时错误标记
pub const DEADLINE_EXCEEDED: &str = "deadline exceeded";

/// SDK 统一错误类型
#[derive(Debug, Error)]
pub enum SdkError {
    /// 必填参数缺失（在发起任何网络请求之前检测）
    #[error("[{operation}] 缺少必填参数: {}", missing.join(", "))]
    Validation {
        operation: &'static str,
        missing: Vec<String>,
    },

    /// 调用方式错误（非法 header、非法 URL 等）
    #[error("调用错误: {0}")]
    Usage(String),

    /// 网络错误 / 无法解析的非 2xx 响应 / 服务 URL 缺失
    #[error("网络错误: {detail}")]
    Transport {
        detail: String,
        response: Option<Box<RawResponse>>,
    },

    /// 请求超时或被取消
    #[error("请求超时 ({DEADLINE_EXCEEDED}): {detail}")]
    DeadlineExceeded { detail: String },

    /// 响应体无法按预期解析
    #[error("响应解析失败: {detail}")]
    Unmarshal {
        detail: String,
        response: Box<RawResponse>,
    },

    /// 服务端返回了结构化的错误响应
    #[error("API 错误 (HTTP {status}): {}", summarize(errors))]
    Api {
        status: u16,
        errors: Vec<ResponseMessage>,
        response: Box<RawResponse>,
    },

    /// 请求体序列化失败
    #[error("序列化失败: {0}")]
    Serialization(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SdkError>;

impl SdkError {
    /// 构造网络错误（无响应）
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
            response: None,
        }
    }

    /// 错误附带的原始响应（如果收到过）
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Self::Transport { response, .. } => response.as_deref(),
            Self::Unmarshal { response, .. } | Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP 状态码（如果收到过响应）
    pub fn status_code(&self) -> Option<u16> {
        self.raw_response().map(|r| r.status_code)
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::DeadlineExceeded { .. })
    }

    /// 调用方是否值得重试
    ///
    /// 参数类错误重试没有意义，只有网络层和超时错误可以重试。
    /// 带状态码的错误与传输层自动重试使用同一判定。
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { detail, response } => {
                detail != SERVICE_URL_MISSING
                    && response
                        .as_ref()
                        .is_none_or(|r| HttpUtils::should_retry_status(r.status_code))
            }
            Self::DeadlineExceeded { .. } => true,
            Self::Api { status, .. } => HttpUtils::should_retry_status(*status),
            _ => false,
        }
    }
}

fn summarize(errors: &[ResponseMessage]) -> String {
    if errors.is_empty() {
        return "未知错误".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_lists_every_missing_field() {
        let err = SdkError::Validation {
            operation: "update_alert_policy",
            missing: vec!["crn".to_string(), "policy_id".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("update_alert_policy"));
        assert!(message.contains("crn, policy_id"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_deadline_marker() {
        let err = SdkError::DeadlineExceeded {
            detail: "30s".to_string(),
        };
        assert!(err.to_string().contains(DEADLINE_EXCEEDED));
        assert!(err.is_deadline_exceeded());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_service_url_missing_has_no_response() {
        let err = SdkError::transport(SERVICE_URL_MISSING);
        assert!(err.to_string().contains(SERVICE_URL_MISSING));
        assert!(err.raw_response().is_none());
        assert!(!err.is_deadline_exceeded());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_not_implemented_is_final() {
        let raw = |status| Box::new(RawResponse::new(status, Vec::new(), Vec::new()));
        let api = |status| SdkError::Api {
            status,
            errors: Vec::new(),
            response: raw(status),
        };
        let transport = |status| SdkError::Transport {
            detail: format!("HTTP {status}"),
            response: Some(raw(status)),
        };

        assert!(!api(501).is_retryable());
        assert!(!transport(501).is_retryable());
        assert!(api(503).is_retryable());
        assert!(transport(503).is_retryable());
        assert!(api(429).is_retryable());
        assert!(!api(404).is_retryable());
    }
}
