//! 扩展点 Trait 定义

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::request::{HttpRequest, RequestBuilder};
use crate::core::response::{FromRawResponse, RawResponse, ResponseKind};
use crate::error::Result;

/// 传输层
///
/// 只负责把请求发出去并读回原始响应。认证在调用前已经完成，
/// 响应解析在调用后进行。
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// 认证器
///
/// 实现:
/// - `NoAuth`: 不附加任何凭证
/// - `BearerTokenAuthenticator`: `Authorization: Bearer <token>`
/// - `BasicAuthenticator`: `Authorization: Basic <base64>`
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// 认证类型名称（与配置中的 `AUTH_TYPE` 对应）
    fn authentication_type(&self) -> &'static str;

    /// 检查凭证是否完整
    fn validate(&self) -> Result<()>;

    /// 为请求附加凭证
    fn authenticate(&self, request: &mut HttpRequest) -> Result<()>;
}

/// 所有 Options 共有的调用级设置
pub trait CallOptions {
    /// 调用方自定义 header，最后合并
    fn headers(&self) -> &HashMap<String, String>;

    /// 本次调用的超时时间，超时返回 `DeadlineExceeded`
    fn timeout(&self) -> Option<Duration>;
}

/// 一个远程操作
///
/// 每个 Options 类型实现此 Trait，`BaseService::invoke` 据此完成
/// 校验 -> 构造请求 -> 发送 -> 解析 的完整流程。
pub trait Operation: CallOptions {
    /// 解析后的结果类型
    type Output: FromRawResponse;

    /// 操作名（用于日志和校验错误）
    const NAME: &'static str;

    /// 响应内容类型要求
    const RESPONSE: ResponseKind = ResponseKind::Json;

    /// 校验必填参数，失败时列出所有缺失字段
    fn validate(&self) -> Result<()>;

    /// 描述请求（服务级路径参数由服务层补齐）
    fn build_request(&self) -> Result<RequestBuilder>;
}
