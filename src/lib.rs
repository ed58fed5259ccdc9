//! 边缘安全服务 SDK
//!
//! 提供告警策略、边缘函数、过滤器、页面规则、限速规则五组资源的异步客户端。
//!
//! 每次调用的流程:
//! 1. 校验 Options 必填参数（缺失时不发出任何请求）
//! 2. 构造请求：路径参数转义、可选查询参数、header、JSON / 二进制 body
//! 3. 认证器附加凭证
//! 4. 传输层发送（可选重试、超时）
//! 5. 解析 `{success, errors, messages, result}` 信封
//!
//! ```no_run
//! use edge_security_sdk::{AlertsService, BearerTokenAuthenticator, ServiceConfig};
//! use edge_security_sdk::services::alerts::GetAlertPoliciesOptions;
//!
//! # async fn run() -> edge_security_sdk::Result<()> {
//! let config = ServiceConfig::new("alerts", BearerTokenAuthenticator::new("token"));
//! let service = AlertsService::new(config, "crn:v1:bluemix:public:internet-svcs:global:a/123::")?;
//! let response = service.get_alert_policies(&GetAlertPoliciesOptions::new()).await?;
//! if let Some(envelope) = response.result {
//!     println!("{} policies", envelope.result.unwrap_or_default().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod http_client;
pub mod services;
pub mod traits;

pub use crate::core::auth::{BasicAuthenticator, BearerTokenAuthenticator, NoAuth};
pub use crate::core::config::{
    DEFAULT_SERVICE_URL, RetryPolicy, ServiceConfig, service_url_for_region,
};
pub use crate::core::request::{HttpRequest, RequestBody};
pub use crate::core::response::{
    DetailedResponse, Envelope, RawResponse, ResponseMessage, ResultInfo,
};
pub use crate::core::service::BaseService;
pub use error::{DEADLINE_EXCEEDED, Result, SERVICE_URL_MISSING, SdkError};
pub use http_client::ReqwestTransport;
pub use services::alerts::AlertsService;
pub use services::edge_functions::EdgeFunctionsService;
pub use services::filters::FiltersService;
pub use services::page_rules::PageRulesService;
pub use services::rate_limits::RateLimitsService;
pub use traits::{Authenticator, CallOptions, HttpTransport, Operation};
