//! 通用服务层
//!
//! 每个资源服务都持有一个 [`BaseService`]，一次调用的流程固定为:
//! 校验 -> 构造请求 -> 认证 -> 发送 -> 解析。
//! 服务本身不保存任何单次调用的状态，可以被多个任务并发使用。

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::{RetryPolicy, ServiceConfig};
use crate::core::request::describe_timeout;
use crate::core::response::{DetailedResponse, decode};
use crate::error::{Result, SdkError};
use crate::http_client::ReqwestTransport;
use crate::traits::{Authenticator, HttpTransport, Operation};

/// 通用服务
///
/// `clone()` 得到的是独立副本：修改副本的 URL、重试开关、默认 header 不影响原实例。
#[derive(Clone)]
pub struct BaseService {
    service_name: String,
    service_url: String,
    authenticator: Arc<dyn Authenticator>,
    transport: Arc<dyn HttpTransport>,
    default_headers: HashMap<String, String>,
    retry: Option<RetryPolicy>,
    timeout: Option<Duration>,
    /// 服务级路径参数（crn、zone 等）
    scope: Vec<(&'static str, String)>,
}

impl std::fmt::Debug for BaseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseService")
            .field("service_name", &self.service_name)
            .field("service_url", &self.service_url)
            .field("authenticator", &self.authenticator)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl BaseService {
    /// 创建服务
    ///
    /// 认证器在这里校验一次；URL 为空不在这里报错，而是在每次调用时返回
    /// `SERVICE_URL_MISSING` 网络错误。
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.authenticator.validate()?;

        let transport: Arc<dyn HttpTransport> = match config.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.enable_gzip)?),
        };

        Ok(Self {
            service_name: config.service_name,
            service_url: config.url,
            authenticator: config.authenticator,
            transport,
            default_headers: config.default_headers,
            retry: config.retry,
            timeout: config.timeout,
            scope: Vec::new(),
        })
    }

    /// 设置服务级路径参数
    ///
    /// 必填的服务级参数在这里校验，缺失时返回 `Validation` 错误。
    pub(crate) fn with_scope(mut self, scope: Vec<(&'static str, String)>) -> Result<Self> {
        let missing: Vec<String> = scope
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SdkError::Validation {
                operation: "new_service",
                missing,
            });
        }
        self.scope = scope;
        Ok(self)
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// 修改服务地址（只影响当前实例）
    pub fn set_service_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        if !url.trim().is_empty() && reqwest::Url::parse(url.trim()).is_err() {
            return Err(SdkError::Usage(format!("无效的服务 URL: {url}")));
        }
        self.service_url = url;
        Ok(())
    }

    pub fn set_default_headers(&mut self, headers: HashMap<String, String>) {
        self.default_headers = headers;
    }

    pub fn enable_retries(&mut self, policy: RetryPolicy) {
        self.retry = Some(policy);
    }

    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry
    }

    pub fn scope_value(&self, name: &str) -> Option<&str> {
        self.scope
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// 执行一个操作
    pub async fn invoke<O: Operation>(&self, options: &O) -> Result<DetailedResponse<O::Output>> {
        options.validate()?;

        let mut request = options
            .build_request()?
            .scope(&self.scope)
            .custom_headers(options.headers())
            .build(&self.service_url)?;
        request.apply_default_headers(&self.default_headers);
        request.retry = self.retry;
        self.authenticator.authenticate(&mut request)?;

        log::debug!("[{}] {} -> {} {}", self.service_name, O::NAME, request.method, request.url);

        let raw = match options.timeout().or(self.timeout) {
            Some(limit) => tokio::time::timeout(limit, self.transport.send(request))
                .await
                .map_err(|_| {
                    log::warn!(
                        "[{}] {} 超时 ({})",
                        self.service_name,
                        O::NAME,
                        describe_timeout(limit)
                    );
                    SdkError::DeadlineExceeded {
                        detail: format!("{} 在 {} 内未完成", O::NAME, describe_timeout(limit)),
                    }
                })??,
            None => self.transport.send(request).await?,
        };

        decode(raw, O::RESPONSE)
    }
}
