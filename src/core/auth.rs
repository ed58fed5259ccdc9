//! 认证器实现
//!
//! 令牌获取（IAM 等）不在本库范围内，调用方拿到令牌后交给 `BearerTokenAuthenticator`。

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::core::request::HttpRequest;
use crate::error::{Result, SdkError};
use crate::traits::Authenticator;

pub const AUTHTYPE_NOAUTH: &str = "noauth";
pub const AUTHTYPE_BEARER_TOKEN: &str = "bearertoken";
pub const AUTHTYPE_BASIC: &str = "basic";

const AUTHORIZATION: &str = "Authorization";

/// 不附加凭证
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl Authenticator for NoAuth {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_NOAUTH
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn authenticate(&self, _request: &mut HttpRequest) -> Result<()> {
        Ok(())
    }
}

/// Bearer Token 认证
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"***")
            .finish()
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BEARER_TOKEN
    }

    fn validate(&self) -> Result<()> {
        check_credential("bearer token", &self.token)
    }

    fn authenticate(&self, request: &mut HttpRequest) -> Result<()> {
        request.set_header(AUTHORIZATION, format!("Bearer {}", self.token));
        Ok(())
    }
}

/// Basic 认证
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BASIC
    }

    fn validate(&self) -> Result<()> {
        check_credential("username", &self.username)?;
        check_credential("password", &self.password)?;
        if self.username.contains(':') {
            return Err(SdkError::Usage("username 不能包含 ':'".to_string()));
        }
        Ok(())
    }

    fn authenticate(&self, request: &mut HttpRequest) -> Result<()> {
        let encoded = BASE64.encode(format!("{}:{}", self.username, self.password));
        request.set_header(AUTHORIZATION, format!("Basic {encoded}"));
        Ok(())
    }
}

/// 凭证不能为空，也不能带有从配置文件里误拷贝的花括号或引号
fn check_credential(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SdkError::Usage(format!("{name} 不能为空")));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) && value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(SdkError::Usage(format!(
            "{name} 不能以花括号或引号包裹，请检查配置"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::RequestBuilder;

    fn request() -> HttpRequest {
        RequestBuilder::get("/v1/items")
            .build("https://api.example.com")
            .unwrap()
    }

    #[test]
    fn test_bearer_token() {
        let auth = BearerTokenAuthenticator::new("abc123");
        auth.validate().unwrap();

        let mut request = request();
        auth.authenticate(&mut request).unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer abc123"));
        assert!(!format!("{auth:?}").contains("abc123"));
    }

    #[test]
    fn test_basic() {
        let auth = BasicAuthenticator::new("user", "pass");
        auth.validate().unwrap();

        let mut request = request();
        auth.authenticate(&mut request).unwrap();
        assert_eq!(request.header("Authorization"), Some("Basic dXNlcjpwYXNz"));
    }

    #[test]
    fn test_invalid_credentials() {
        assert!(BearerTokenAuthenticator::new("").validate().is_err());
        assert!(BearerTokenAuthenticator::new("{token}").validate().is_err());
        assert!(BasicAuthenticator::new("a:b", "pass").validate().is_err());
        assert!(BasicAuthenticator::new("user", "\"pass\"").validate().is_err());
    }

    #[test]
    fn test_noauth_leaves_request_untouched() {
        let mut request = request();
        NoAuth.authenticate(&mut request).unwrap();
        assert!(request.header("Authorization").is_none());
    }
}
