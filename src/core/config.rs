//! 服务配置
//!
//! 配置只在构造服务时读取一次。环境变量风格的配置通过 [`ServiceConfig::from_vars`]
//! 显式传入，不修改任何进程级状态；`.env` 文件也只读取，不写入进程环境。

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::core::auth::{
    AUTHTYPE_BASIC, AUTHTYPE_BEARER_TOKEN, AUTHTYPE_NOAUTH, BasicAuthenticator,
    BearerTokenAuthenticator, NoAuth,
};
use crate::error::{Result, SdkError};
use crate::traits::{Authenticator, HttpTransport};

/// 默认服务地址
pub const DEFAULT_SERVICE_URL: &str = "https://api.cis.cloud.ibm.com";

/// 区域 -> 服务地址
const REGION_URLS: &[(&str, &str)] = &[("global", DEFAULT_SERVICE_URL)];

/// 根据区域获取服务地址
pub fn service_url_for_region(region: &str) -> Result<&'static str> {
    REGION_URLS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(region.trim()))
        .map(|(_, url)| *url)
        .ok_or_else(|| SdkError::Usage(format!("未知区域: {region}")))
}

/// 重试策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// 两次重试之间的最长等待
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            interval: Duration::from_secs(30),
        }
    }
}

/// 服务配置
#[derive(Clone)]
pub struct ServiceConfig {
    pub service_name: String,
    pub url: String,
    pub authenticator: Arc<dyn Authenticator>,
    /// `None` 表示不重试
    pub retry: Option<RetryPolicy>,
    /// 默认单次调用超时
    pub timeout: Option<Duration>,
    pub enable_gzip: bool,
    pub default_headers: HashMap<String, String>,
    /// 自定义传输层；未设置时使用 reqwest
    pub transport: Option<Arc<dyn HttpTransport>>,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("service_name", &self.service_name)
            .field("url", &self.url)
            .field("authenticator", &self.authenticator)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .field("enable_gzip", &self.enable_gzip)
            .field("default_headers", &self.default_headers)
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl ServiceConfig {
    pub fn new(
        service_name: impl Into<String>,
        authenticator: impl Authenticator + 'static,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            url: DEFAULT_SERVICE_URL.to_string(),
            authenticator: Arc::new(authenticator),
            retry: None,
            timeout: None,
            enable_gzip: false,
            default_headers: HashMap::new(),
            transport: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_gzip(mut self, enable: bool) -> Self {
        self.enable_gzip = enable;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// 从环境变量风格的键值对构造配置
    ///
    /// 以服务名（大写，`-` 替换为 `_`）为前缀:
    /// - `<NAME>_URL`
    /// - `<NAME>_AUTH_TYPE`: `noauth` / `bearertoken` / `basic`
    /// - `<NAME>_BEARER_TOKEN`, `<NAME>_USERNAME`, `<NAME>_PASSWORD`
    /// - `<NAME>_ENABLE_RETRIES`, `<NAME>_MAX_RETRIES`, `<NAME>_RETRY_INTERVAL`（秒）
    /// - `<NAME>_ENABLE_GZIP`
    pub fn from_vars<I, K, V>(service_name: &str, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let prefix = format!("{}_", service_name.to_ascii_uppercase().replace('-', "_"));
        let props: HashMap<String, String> = vars
            .into_iter()
            .filter_map(|(k, v)| {
                let key: String = k.into();
                key.strip_prefix(&prefix)
                    .map(|name| (name.to_string(), v.into()))
            })
            .collect();

        let get = |name: &str| {
            props
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let auth_type = get("AUTH_TYPE").unwrap_or(AUTHTYPE_BEARER_TOKEN).to_ascii_lowercase();
        let authenticator: Arc<dyn Authenticator> = match auth_type.as_str() {
            AUTHTYPE_NOAUTH => Arc::new(NoAuth),
            AUTHTYPE_BEARER_TOKEN => {
                Arc::new(BearerTokenAuthenticator::new(get("BEARER_TOKEN").unwrap_or_default()))
            }
            AUTHTYPE_BASIC => Arc::new(BasicAuthenticator::new(
                get("USERNAME").unwrap_or_default(),
                get("PASSWORD").unwrap_or_default(),
            )),
            other => return Err(SdkError::Usage(format!("不支持的认证类型: {other}"))),
        };
        authenticator.validate()?;

        let mut config = Self {
            service_name: service_name.to_string(),
            url: get("URL").unwrap_or(DEFAULT_SERVICE_URL).to_string(),
            authenticator,
            retry: None,
            timeout: None,
            enable_gzip: get("ENABLE_GZIP").is_some_and(parse_bool),
            default_headers: HashMap::new(),
            transport: None,
        };

        if get("ENABLE_RETRIES").is_some_and(parse_bool) {
            let mut policy = RetryPolicy::default();
            if let Some(value) = get("MAX_RETRIES") {
                policy.max_retries = value
                    .parse()
                    .map_err(|e| SdkError::Usage(format!("MAX_RETRIES 无效: {e}")))?;
            }
            if let Some(value) = get("RETRY_INTERVAL") {
                let seconds: u64 = value
                    .parse()
                    .map_err(|e| SdkError::Usage(format!("RETRY_INTERVAL 无效: {e}")))?;
                policy.interval = Duration::from_secs(seconds);
            }
            config.retry = Some(policy);
        }

        log::debug!(
            "[{}] 配置加载完成: url={}, auth={}",
            config.service_name,
            config.url,
            config.authenticator.authentication_type()
        );

        Ok(config)
    }

    /// 从进程环境变量构造配置
    pub fn from_env(service_name: &str) -> Result<Self> {
        Self::from_vars(service_name, std::env::vars())
    }

    /// 从 `.env` 格式的文件构造配置
    ///
    /// 变量名规则与 [`ServiceConfig::from_vars`] 相同。
    pub fn from_env_file(service_name: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let vars = dotenvy::from_path_iter(path)
            .and_then(|iter| iter.collect::<std::result::Result<Vec<_>, _>>())
            .map_err(|e| SdkError::Usage(format!("读取配置文件 {} 失败: {e}", path.display())))?;
        log::debug!("[{service_name}] 从 {} 读取到 {} 个变量", path.display(), vars.len());
        Self::from_vars(service_name, vars)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
