//! 请求映射
//!
//! 把每个操作的 Options 转换成具体的 HTTP 请求：
//! - 路径参数替换（URL 转义）
//! - 可选查询参数按声明顺序追加，未设置的直接省略
//! - 操作声明的 header 先写入，调用方自定义 header 最后合并（不能覆盖 body 的 Content-Type）
//! - JSON body 只包含已设置的字段；二进制 body 原样透传

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;

use crate::core::config::RetryPolicy;
use crate::error::{Result, SERVICE_URL_MISSING, SdkError};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
pub const APPLICATION_JSON: &str = "application/json";

/// 请求体
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Bytes(Vec<u8>),
}

/// 已完成映射、可以直接交给传输层的请求
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// 不含查询参数的完整 URL
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    /// 由服务配置决定，传输层据此重试
    pub retry: Option<RetryPolicy>,
}

impl HttpRequest {
    /// 按名称查找 header（大小写不敏感）
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// 设置 header，已存在时覆盖
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        set_header(&mut self.headers, name, value.into());
    }

    /// 只补充尚未设置的 header
    pub fn apply_default_headers(&mut self, defaults: &HashMap<String, String>) {
        let mut names: Vec<&String> = defaults.keys().collect();
        names.sort();
        for name in names {
            if self.header(name).is_none() {
                self.headers.push((name.clone(), defaults[name].clone()));
            }
        }
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// 带查询串的 URL（用于日志）
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.url)
    }
}

/// 请求构造器
///
/// 每个操作在 `Operation::build_request` 中用它描述请求，
/// 服务层负责补齐服务级路径参数并调用 [`RequestBuilder::build`]。
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    path_template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    custom_headers: Vec<(String, String)>,
    body: RequestBody,
}

impl RequestBuilder {
    pub fn new(method: Method, path_template: &'static str) -> Self {
        Self {
            method,
            path_template,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: vec![(ACCEPT.to_string(), APPLICATION_JSON.to_string())],
            custom_headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path_template: &'static str) -> Self {
        Self::new(Method::GET, path_template)
    }

    pub fn post(path_template: &'static str) -> Self {
        Self::new(Method::POST, path_template)
    }

    pub fn put(path_template: &'static str) -> Self {
        Self::new(Method::PUT, path_template)
    }

    pub fn patch(path_template: &'static str) -> Self {
        Self::new(Method::PATCH, path_template)
    }

    pub fn delete(path_template: &'static str) -> Self {
        Self::new(Method::DELETE, path_template)
    }

    /// 路径参数（值会被 URL 转义）
    #[must_use]
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// 服务级路径参数（crn、zone 等），不覆盖操作自己声明的同名参数
    #[must_use]
    pub fn scope(mut self, params: &[(&'static str, String)]) -> Self {
        for (name, value) in params {
            if !self.path_params.iter().any(|(n, _)| n == name) {
                self.path_params.push((name, value.clone()));
            }
        }
        self
    }

    /// 可选查询参数，`None` 时不输出
    #[must_use]
    pub fn query<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// 操作声明的可选 header，`None` 时不输出
    #[must_use]
    pub fn header(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            set_header(&mut self.headers, name, value.to_string());
        }
        self
    }

    #[must_use]
    pub fn accept(mut self, value: &str) -> Self {
        set_header(&mut self.headers, ACCEPT, value.to_string());
        self
    }

    /// 调用方自定义 header，构建时最后合并
    #[must_use]
    pub fn custom_headers(mut self, headers: &HashMap<String, String>) -> Self {
        let mut names: Vec<&String> = headers.keys().collect();
        names.sort();
        for name in names {
            self.custom_headers.push((name.clone(), headers[name].clone()));
        }
        self
    }

    /// JSON body
    ///
    /// 字段是否输出由模型上的 `skip_serializing_if` 决定，未设置的可选字段不会出现 `null`。
    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| SdkError::Serialization(e.to_string()))?;
        set_header(&mut self.headers, CONTENT_TYPE, APPLICATION_JSON.to_string());
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// 原样透传的二进制 body
    #[must_use]
    pub fn bytes_body(mut self, bytes: Vec<u8>, content_type: &str) -> Self {
        set_header(&mut self.headers, CONTENT_TYPE, content_type.to_string());
        self.body = RequestBody::Bytes(bytes);
        self
    }

    /// 生成最终请求
    pub fn build(self, service_url: &str) -> Result<HttpRequest> {
        let base = service_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(SdkError::transport(SERVICE_URL_MISSING));
        }

        let path = expand_path(self.path_template, &self.path_params)?;

        let mut headers = self.headers;
        let has_body = self.body != RequestBody::Empty;
        for (name, value) in self.custom_headers {
            if has_body && name.eq_ignore_ascii_case(CONTENT_TYPE) {
                log::debug!("忽略自定义 Content-Type: {value}");
                continue;
            }
            set_header(&mut headers, &name, value);
        }

        Ok(HttpRequest {
            method: self.method,
            url: format!("{base}{path}"),
            query: self.query,
            headers,
            body: self.body,
            retry: None,
        })
    }
}

/// 替换路径模板中的 `{name}` 占位符
fn expand_path(template: &str, params: &[(&'static str, String)]) -> Result<String> {
    let mut path = template.to_string();
    for (name, value) in params {
        path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
    }
    if let Some(start) = path.find('{') {
        return Err(SdkError::Usage(format!(
            "路径参数未替换: {}",
            &path[start..]
        )));
    }
    Ok(path)
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    if let Some(slot) = headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        slot.1 = value;
    } else {
        headers.push((name.to_string(), value));
    }
}

/// 超时时长的可读形式（日志和错误信息用）
pub(crate) fn describe_timeout(limit: Duration) -> String {
    format!("{}ms", limit.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_params_are_escaped() {
        let request = RequestBuilder::get("/v1/{crn}/alerting/policies/{policy_id}")
            .path_param("policy_id", "a b/c")
            .scope(&[("crn", "crn:v1:bluemix:public:internet-svcs".to_string())])
            .build("https://api.example.com/")
            .unwrap();

        assert_eq!(
            request.url,
            "https://api.example.com/v1/crn%3Av1%3Abluemix%3Apublic%3Ainternet-svcs/alerting/policies/a%20b%2Fc"
        );
    }

    #[test]
    fn test_unresolved_placeholder_is_usage_error() {
        let err = RequestBuilder::get("/v1/{crn}/zones/{zone_id}")
            .path_param("crn", "x")
            .build("https://api.example.com")
            .unwrap_err();
        assert!(matches!(err, SdkError::Usage(_)));
    }

    #[test]
    fn test_empty_service_url() {
        let err = RequestBuilder::delete("/v1/x").build("  ").unwrap_err();
        assert!(err.to_string().contains(SERVICE_URL_MISSING));
    }

    #[test]
    fn test_query_keeps_declared_order_and_skips_none() {
        let request = RequestBuilder::get("/items")
            .query("page", Some(2))
            .query("per_page", None::<i64>)
            .query("status", Some("active"))
            .query("order", Some("priority"))
            .build("https://api.example.com")
            .unwrap();

        let names: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["page", "status", "order"]);
        assert_eq!(
            request.full_url(),
            "https://api.example.com/items?page=2&status=active&order=priority"
        );
    }

    #[test]
    fn test_custom_headers_cannot_override_body_content_type() {
        let mut custom = HashMap::new();
        custom.insert("content-type".to_string(), "text/plain".to_string());
        custom.insert("Accept".to_string(), "*/*".to_string());
        custom.insert("X-Extra".to_string(), "1".to_string());

        let request = RequestBuilder::post("/items")
            .json_body(&json!({"name": "x"}))
            .unwrap()
            .custom_headers(&custom)
            .build("https://api.example.com")
            .unwrap();

        assert_eq!(request.header(CONTENT_TYPE), Some(APPLICATION_JSON));
        assert_eq!(request.header("accept"), Some("*/*"));
        assert_eq!(request.header("x-extra"), Some("1"));
    }

    #[test]
    fn test_custom_content_type_allowed_without_body() {
        let mut custom = HashMap::new();
        custom.insert("Content-Type".to_string(), "text/plain".to_string());

        let request = RequestBuilder::get("/items")
            .custom_headers(&custom)
            .build("https://api.example.com")
            .unwrap();
        assert_eq!(request.header(CONTENT_TYPE), Some("text/plain"));
    }

    #[test]
    fn test_bytes_body_passes_through() {
        let script = b"addEventListener('fetch', e => {})".to_vec();
        let request = RequestBuilder::put("/scripts/{name}")
            .path_param("name", "worker")
            .bytes_body(script.clone(), "application/javascript")
            .build("https://api.example.com")
            .unwrap();

        assert_eq!(request.body, RequestBody::Bytes(script));
        assert_eq!(request.header(CONTENT_TYPE), Some("application/javascript"));
    }

    #[test]
    fn test_default_headers_do_not_override() {
        let mut request = RequestBuilder::get("/items")
            .header("X-Correlation-ID", Some("abc"))
            .build("https://api.example.com")
            .unwrap();

        let mut defaults = HashMap::new();
        defaults.insert("x-correlation-id".to_string(), "default".to_string());
        defaults.insert("X-Default".to_string(), "yes".to_string());
        request.apply_default_headers(&defaults);

        assert_eq!(request.header("X-Correlation-ID"), Some("abc"));
        assert_eq!(request.header("X-Default"), Some("yes"));
    }
}
