//! 过滤器操作参数
//!
//! 所有操作都接受任意 Content-Type 的响应（[`ResponseKind::Lenient`]）。

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::core::options::{RequiredFields, call_options};
use crate::core::request::RequestBuilder;
use crate::core::response::ResponseKind;
use crate::error::Result;
use crate::traits::Operation;

use super::types::{
    DeleteFilterResp, DeleteFiltersResp, FilterInput, FilterResp, FilterUpdateInput, FiltersResp,
    ListFiltersResp,
};
use super::{FILTER_PATH, FILTERS_PATH, X_AUTH_USER_TOKEN};

/// 校验三个公共必填参数
fn required(
    operation: &'static str,
    token: &str,
    crn: &str,
    zone_identifier: &str,
) -> RequiredFields {
    RequiredFields::new(operation)
        .text("x_auth_user_token", token)
        .text("crn", crn)
        .text("zone_identifier", zone_identifier)
}

/// 填充公共路径参数和认证 header
fn zone_request(
    builder: RequestBuilder,
    token: &str,
    crn: &str,
    zone_identifier: &str,
) -> RequestBuilder {
    builder
        .path_param("crn", crn)
        .path_param("zone_identifier", zone_identifier)
        .header(X_AUTH_USER_TOKEN, Some(token))
}

/// 列出 zone 下所有过滤器
#[derive(Debug, Clone, Default)]
pub struct ListAllFiltersOptions {
    pub x_auth_user_token: String,
    pub crn: String,
    pub zone_identifier: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl ListAllFiltersOptions {
    pub fn new(
        x_auth_user_token: impl Into<String>,
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
    ) -> Self {
        Self {
            x_auth_user_token: x_auth_user_token.into(),
            crn: crn.into(),
            zone_identifier: zone_identifier.into(),
            ..Self::default()
        }
    }
}

impl Operation for ListAllFiltersOptions {
    type Output = ListFiltersResp;
    const NAME: &'static str = "list_all_filters";
    const RESPONSE: ResponseKind = ResponseKind::Lenient;

    fn validate(&self) -> Result<()> {
        required(Self::NAME, &self.x_auth_user_token, &self.crn, &self.zone_identifier).finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(zone_request(
            RequestBuilder::get(FILTERS_PATH),
            &self.x_auth_user_token,
            &self.crn,
            &self.zone_identifier,
        ))
    }
}

/// 批量创建过滤器
///
/// 请求体是 [`FilterInput`] 数组；未设置时不发送请求体，设置为空数组时发送 `[]`。
#[derive(Debug, Clone, Default)]
pub struct CreateFilterOptions {
    pub x_auth_user_token: String,
    pub crn: String,
    pub zone_identifier: String,
    pub filter_input: Option<Vec<FilterInput>>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl CreateFilterOptions {
    pub fn new(
        x_auth_user_token: impl Into<String>,
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
    ) -> Self {
        Self {
            x_auth_user_token: x_auth_user_token.into(),
            crn: crn.into(),
            zone_identifier: zone_identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_filter_input(mut self, filter_input: Vec<FilterInput>) -> Self {
        self.filter_input = Some(filter_input);
        self
    }
}

impl Operation for CreateFilterOptions {
    type Output = FiltersResp;
    const NAME: &'static str = "create_filter";
    const RESPONSE: ResponseKind = ResponseKind::Lenient;

    fn validate(&self) -> Result<()> {
        required(Self::NAME, &self.x_auth_user_token, &self.crn, &self.zone_identifier).finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        let builder = zone_request(
            RequestBuilder::post(FILTERS_PATH),
            &self.x_auth_user_token,
            &self.crn,
            &self.zone_identifier,
        );
        match &self.filter_input {
            Some(filter_input) => builder.json_body(filter_input),
            None => Ok(builder),
        }
    }
}

/// 批量更新过滤器
#[derive(Debug, Clone, Default)]
pub struct UpdateFiltersOptions {
    pub x_auth_user_token: String,
    pub crn: String,
    pub zone_identifier: String,
    pub filter_update_input: Option<Vec<FilterUpdateInput>>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl UpdateFiltersOptions {
    pub fn new(
        x_auth_user_token: impl Into<String>,
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
    ) -> Self {
        Self {
            x_auth_user_token: x_auth_user_token.into(),
            crn: crn.into(),
            zone_identifier: zone_identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_filter_update_input(mut self, filter_update_input: Vec<FilterUpdateInput>) -> Self {
        self.filter_update_input = Some(filter_update_input);
        self
    }
}

impl Operation for UpdateFiltersOptions {
    type Output = FiltersResp;
    const NAME: &'static str = "update_filters";
    const RESPONSE: ResponseKind = ResponseKind::Lenient;

    fn validate(&self) -> Result<()> {
        required(Self::NAME, &self.x_auth_user_token, &self.crn, &self.zone_identifier).finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        let builder = zone_request(
            RequestBuilder::put(FILTERS_PATH),
            &self.x_auth_user_token,
            &self.crn,
            &self.zone_identifier,
        );
        match &self.filter_update_input {
            Some(filter_update_input) => builder.json_body(filter_update_input),
            None => Ok(builder),
        }
    }
}

/// 批量删除过滤器
#[derive(Debug, Clone, Default)]
pub struct DeleteFiltersOptions {
    pub x_auth_user_token: String,
    pub crn: String,
    pub zone_identifier: String,
    /// 逗号分隔的过滤器 ID
    pub id: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl DeleteFiltersOptions {
    pub fn new(
        x_auth_user_token: impl Into<String>,
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            x_auth_user_token: x_auth_user_token.into(),
            crn: crn.into(),
            zone_identifier: zone_identifier.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// 用多个 ID 设置 `id`
    #[must_use]
    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.id = ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self
    }
}

impl Operation for DeleteFiltersOptions {
    type Output = DeleteFiltersResp;
    const NAME: &'static str = "delete_filters";
    const RESPONSE: ResponseKind = ResponseKind::Lenient;

    fn validate(&self) -> Result<()> {
        required(Self::NAME, &self.x_auth_user_token, &self.crn, &self.zone_identifier)
            .text("id", &self.id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(zone_request(
            RequestBuilder::delete(FILTERS_PATH),
            &self.x_auth_user_token,
            &self.crn,
            &self.zone_identifier,
        )
        .query("id", Some(&self.id)))
    }
}

/// 获取单个过滤器
#[derive(Debug, Clone, Default)]
pub struct GetFilterOptions {
    pub x_auth_user_token: String,
    pub crn: String,
    pub zone_identifier: String,
    pub filter_identifier: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl GetFilterOptions {
    pub fn new(
        x_auth_user_token: impl Into<String>,
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
        filter_identifier: impl Into<String>,
    ) -> Self {
        Self {
            x_auth_user_token: x_auth_user_token.into(),
            crn: crn.into(),
            zone_identifier: zone_identifier.into(),
            filter_identifier: filter_identifier.into(),
            ..Self::default()
        }
    }
}

impl Operation for GetFilterOptions {
    type Output = FilterResp;
    const NAME: &'static str = "get_filter";
    const RESPONSE: ResponseKind = ResponseKind::Lenient;

    fn validate(&self) -> Result<()> {
        required(Self::NAME, &self.x_auth_user_token, &self.crn, &self.zone_identifier)
            .text("filter_identifier", &self.filter_identifier)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(zone_request(
            RequestBuilder::get(FILTER_PATH),
            &self.x_auth_user_token,
            &self.crn,
            &self.zone_identifier,
        )
        .path_param("filter_identifier", self.filter_identifier.clone()))
    }
}

/// 更新单个过滤器
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFilterOptions {
    #[serde(skip)]
    pub x_auth_user_token: String,
    #[serde(skip)]
    pub crn: String,
    #[serde(skip)]
    pub zone_identifier: String,
    #[serde(skip)]
    pub filter_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl UpdateFilterOptions {
    pub fn new(
        x_auth_user_token: impl Into<String>,
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
        filter_identifier: impl Into<String>,
    ) -> Self {
        Self {
            x_auth_user_token: x_auth_user_token.into(),
            crn: crn.into(),
            zone_identifier: zone_identifier.into(),
            filter_identifier: filter_identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }
}

impl Operation for UpdateFilterOptions {
    type Output = FilterResp;
    const NAME: &'static str = "update_filter";
    const RESPONSE: ResponseKind = ResponseKind::Lenient;

    fn validate(&self) -> Result<()> {
        required(Self::NAME, &self.x_auth_user_token, &self.crn, &self.zone_identifier)
            .text("filter_identifier", &self.filter_identifier)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        zone_request(
            RequestBuilder::put(FILTER_PATH),
            &self.x_auth_user_token,
            &self.crn,
            &self.zone_identifier,
        )
        .path_param("filter_identifier", self.filter_identifier.clone())
        .json_body(self)
    }
}

/// 删除单个过滤器
#[derive(Debug, Clone, Default)]
pub struct DeleteFilterOptions {
    pub x_auth_user_token: String,
    pub crn: String,
    pub zone_identifier: String,
    pub filter_identifier: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl DeleteFilterOptions {
    pub fn new(
        x_auth_user_token: impl Into<String>,
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
        filter_identifier: impl Into<String>,
    ) -> Self {
        Self {
            x_auth_user_token: x_auth_user_token.into(),
            crn: crn.into(),
            zone_identifier: zone_identifier.into(),
            filter_identifier: filter_identifier.into(),
            ..Self::default()
        }
    }
}

impl Operation for DeleteFilterOptions {
    type Output = DeleteFilterResp;
    const NAME: &'static str = "delete_filter";
    const RESPONSE: ResponseKind = ResponseKind::Lenient;

    fn validate(&self) -> Result<()> {
        required(Self::NAME, &self.x_auth_user_token, &self.crn, &self.zone_identifier)
            .text("filter_identifier", &self.filter_identifier)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(zone_request(
            RequestBuilder::delete(FILTER_PATH),
            &self.x_auth_user_token,
            &self.crn,
            &self.zone_identifier,
        )
        .path_param("filter_identifier", self.filter_identifier.clone()))
    }
}

call_options!(
    ListAllFiltersOptions,
    CreateFilterOptions,
    UpdateFiltersOptions,
    DeleteFiltersOptions,
    GetFilterOptions,
    UpdateFilterOptions,
    DeleteFilterOptions,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::{APPLICATION_JSON, CONTENT_TYPE, RequestBody};
    use crate::error::SdkError;
    use serde_json::json;

    const BASE: &str = "https://api.example.com";

    #[test]
    fn test_create_filter_array_body() {
        let request = CreateFilterOptions::new("token", "crn:v1", "zone-1")
            .with_filter_input(vec![
                FilterInput::new("not http.request.uri.path matches \"^/api/.*$\"")
                    .with_paused(false),
            ])
            .build_request()
            .unwrap()
            .build(BASE)
            .unwrap();

        assert_eq!(request.url, "https://api.example.com/v1/crn%3Av1/zones/zone-1/filters");
        assert_eq!(request.header(X_AUTH_USER_TOKEN), Some("token"));
        assert_eq!(
            request.body,
            RequestBody::Json(json!([
                {"expression": "not http.request.uri.path matches \"^/api/.*$\"", "paused": false}
            ]))
        );
    }

    #[test]
    fn test_create_filter_without_input_has_no_body() {
        let request = CreateFilterOptions::new("token", "crn", "zone")
            .build_request()
            .unwrap()
            .build(BASE)
            .unwrap();
        assert_eq!(request.body, RequestBody::Empty);
    }

    #[test]
    fn test_explicit_empty_list_is_sent() {
        let request = CreateFilterOptions::new("token", "crn", "zone")
            .with_filter_input(vec![])
            .build_request()
            .unwrap()
            .build(BASE)
            .unwrap();
        assert_eq!(request.body, RequestBody::Json(json!([])));
        assert_eq!(request.header(CONTENT_TYPE), Some(APPLICATION_JSON));

        let request = UpdateFiltersOptions::new("token", "crn", "zone")
            .with_filter_update_input(vec![])
            .build_request()
            .unwrap()
            .build(BASE)
            .unwrap();
        assert_eq!(request.body, RequestBody::Json(json!([])));

        let request = UpdateFiltersOptions::new("token", "crn", "zone")
            .build_request()
            .unwrap()
            .build(BASE)
            .unwrap();
        assert_eq!(request.body, RequestBody::Empty);
    }

    #[test]
    fn test_delete_filters_joins_ids() {
        let request = DeleteFiltersOptions::new("token", "crn", "zone", "")
            .with_ids(["a", "b", "c"])
            .build_request()
            .unwrap()
            .build(BASE)
            .unwrap();
        assert_eq!(request.query_param("id"), Some("a,b,c"));
    }

    #[test]
    fn test_update_filter_partial_body() {
        let request = UpdateFilterOptions::new("token", "crn", "zone", "f-1")
            .with_paused(true)
            .build_request()
            .unwrap()
            .build(BASE)
            .unwrap();
        assert_eq!(request.url, "https://api.example.com/v1/crn/zones/zone/filters/f-1");
        assert_eq!(request.body, RequestBody::Json(json!({"paused": true})));
    }

    #[test]
    fn test_all_common_fields_reported() {
        let err = GetFilterOptions::default().validate().unwrap_err();
        match err {
            SdkError::Validation { operation, missing } => {
                assert_eq!(operation, "get_filter");
                assert_eq!(
                    missing,
                    vec!["x_auth_user_token", "crn", "zone_identifier", "filter_identifier"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
