//! 通用 HTTP 客户端工具
//!
//! 默认传输层基于 reqwest，负责：发送请求、日志记录、读取响应、按策略重试。
//! 认证、请求映射和响应解析都不在这里做，传输层只搬运字节。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::core::config::RetryPolicy;
use crate::core::request::{HttpRequest, RequestBody};
use crate::core::response::RawResponse;
use crate::error::{Result, SdkError};
use crate::traits::HttpTransport;

const USER_AGENT: &str = concat!("edge-security-sdk/", env!("CARGO_PKG_VERSION"));

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// 解析 JSON 响应
    ///
    /// 失败时记录原始响应，返回错误描述
    pub fn parse_json<T>(body: &[u8]) -> std::result::Result<T, String>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(body).map_err(|e| {
            log::error!("JSON 解析失败: {e}");
            log::error!("原始响应: {}", String::from_utf8_lossy(body));
            e.to_string()
        })
    }

    /// 计算下一次重试前的等待时间
    ///
    /// 服务端给出 `Retry-After`（秒）且不超过策略间隔时以服务端为准
    pub fn retry_delay(policy: &RetryPolicy, response: Option<&RawResponse>) -> Duration {
        response
            .and_then(|r| r.header("Retry-After"))
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .filter(|d| *d <= policy.interval)
            .unwrap_or(policy.interval)
    }

    /// 可重试的状态码：429 以及除 501 以外的 5xx
    pub(crate) fn should_retry_status(status: u16) -> bool {
        status == 429 || ((500..600).contains(&status) && status != 501)
    }
}

/// 基于 reqwest 的默认传输层
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(enable_gzip: bool) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(enable_gzip)
            .build()
            .map_err(|e| SdkError::Usage(format!("创建 HTTP 客户端失败: {e}")))?;
        Ok(Self { client })
    }

    /// 复用调用方自己配置的 reqwest 客户端
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// 执行一次 HTTP 请求并读取完整响应
    async fn execute_request(&self, request: &HttpRequest) -> Result<RawResponse> {
        log::debug!("{} {}", request.method, request.full_url());

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => {
                let payload = serde_json::to_vec(value)
                    .map_err(|e| SdkError::Serialization(e.to_string()))?;
                log::debug!("Request Body: {value}");
                builder.body(payload)
            }
            RequestBody::Bytes(bytes) => {
                log::debug!("Request Body: <{} bytes>", bytes.len());
                builder.body(bytes.clone())
            }
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                SdkError::DeadlineExceeded {
                    detail: format!("读取响应失败: {e}"),
                }
            } else {
                SdkError::transport(format!("读取响应失败: {e}"))
            }
        })?;

        log::debug!("Response Body: {}", String::from_utf8_lossy(&body));

        Ok(RawResponse::new(status_code, headers, body.to_vec()))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse> {
        let Some(policy) = request.retry else {
            return self.execute_request(&request).await;
        };

        let mut attempt = 0;
        loop {
            let outcome = self.execute_request(&request).await;
            let retry = attempt < policy.max_retries
                && match &outcome {
                    Ok(raw) => HttpUtils::should_retry_status(raw.status_code),
                    Err(e) => matches!(e, SdkError::Transport { .. }) && e.is_retryable(),
                };
            if !retry {
                return outcome;
            }

            attempt += 1;
            let delay = HttpUtils::retry_delay(&policy, outcome.as_ref().ok());
            log::warn!(
                "{} {} 第 {attempt}/{} 次重试，等待 {}ms",
                request.method,
                request.url,
                policy.max_retries,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }
}

fn map_reqwest_error(e: reqwest::Error) -> SdkError {
    if e.is_timeout() {
        SdkError::DeadlineExceeded {
            detail: e.to_string(),
        }
    } else if e.is_builder() {
        SdkError::Usage(format!("无效的请求: {e}"))
    } else {
        SdkError::transport(e.to_string())
    }
}
