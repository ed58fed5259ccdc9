//! 边缘函数操作参数

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::core::options::{RequiredFields, call_options};
use crate::core::request::RequestBuilder;
use crate::core::response::ResponseKind;
use crate::error::Result;
use crate::traits::Operation;

use super::types::{
    CreateEdgeFunctionsTriggerResp, EdgeFunctionsActionResp, GetEdgeFunctionsTriggerResp,
    ListEdgeFunctionsActionsResp, ListEdgeFunctionsTriggersResp,
};
use super::{
    APPLICATION_JAVASCRIPT, ROUTE_PATH, ROUTES_PATH, SCRIPT_PATH, SCRIPTS_PATH, X_CORRELATION_ID,
};

/// 列出所有脚本
#[derive(Debug, Clone, Default)]
pub struct ListEdgeFunctionsActionsOptions {
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl ListEdgeFunctionsActionsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for ListEdgeFunctionsActionsOptions {
    type Output = ListEdgeFunctionsActionsResp;
    const NAME: &'static str = "list_edge_functions_actions";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(SCRIPTS_PATH)
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref()))
    }
}

/// 上传（覆盖）脚本
///
/// 脚本内容原样作为请求体发送。
#[derive(Debug, Clone, Default)]
pub struct UpdateEdgeFunctionsActionOptions {
    pub script_name: String,
    pub edge_functions_action: Option<Vec<u8>>,
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl UpdateEdgeFunctionsActionOptions {
    pub fn new(script_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_edge_functions_action(mut self, script: impl Into<Vec<u8>>) -> Self {
        self.edge_functions_action = Some(script.into());
        self
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for UpdateEdgeFunctionsActionOptions {
    type Output = EdgeFunctionsActionResp;
    const NAME: &'static str = "update_edge_functions_action";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("script_name", &self.script_name)
            .present("edge_functions_action", self.edge_functions_action.as_ref())
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        let script = self.edge_functions_action.clone().unwrap_or_default();
        Ok(RequestBuilder::put(SCRIPT_PATH)
            .path_param("script_name", self.script_name.clone())
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref())
            .bytes_body(script, APPLICATION_JAVASCRIPT))
    }
}

/// 下载脚本内容
#[derive(Debug, Clone, Default)]
pub struct GetEdgeFunctionsActionOptions {
    pub script_name: String,
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl GetEdgeFunctionsActionOptions {
    pub fn new(script_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for GetEdgeFunctionsActionOptions {
    type Output = Vec<u8>;
    const NAME: &'static str = "get_edge_functions_action";
    const RESPONSE: ResponseKind = ResponseKind::Binary;

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("script_name", &self.script_name)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(SCRIPT_PATH)
            .path_param("script_name", self.script_name.clone())
            .accept(APPLICATION_JAVASCRIPT)
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref()))
    }
}

/// 删除脚本
#[derive(Debug, Clone, Default)]
pub struct DeleteEdgeFunctionsActionOptions {
    pub script_name: String,
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl DeleteEdgeFunctionsActionOptions {
    pub fn new(script_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for DeleteEdgeFunctionsActionOptions {
    type Output = EdgeFunctionsActionResp;
    const NAME: &'static str = "delete_edge_functions_action";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("script_name", &self.script_name)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::delete(SCRIPT_PATH)
            .path_param("script_name", self.script_name.clone())
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref()))
    }
}

/// 创建触发器
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEdgeFunctionsTriggerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl CreateEdgeFunctionsTriggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for CreateEdgeFunctionsTriggerOptions {
    type Output = CreateEdgeFunctionsTriggerResp;
    const NAME: &'static str = "create_edge_functions_trigger";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::post(ROUTES_PATH)
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref())
            .json_body(self)
    }
}

/// 列出 zone 下的触发器
#[derive(Debug, Clone, Default)]
pub struct ListEdgeFunctionsTriggersOptions {
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl ListEdgeFunctionsTriggersOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for ListEdgeFunctionsTriggersOptions {
    type Output = ListEdgeFunctionsTriggersResp;
    const NAME: &'static str = "list_edge_functions_triggers";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(ROUTES_PATH)
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref()))
    }
}

/// 获取触发器
#[derive(Debug, Clone, Default)]
pub struct GetEdgeFunctionsTriggerOptions {
    pub route_id: String,
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl GetEdgeFunctionsTriggerOptions {
    pub fn new(route_id: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for GetEdgeFunctionsTriggerOptions {
    type Output = GetEdgeFunctionsTriggerResp;
    const NAME: &'static str = "get_edge_functions_trigger";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("route_id", &self.route_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get(ROUTE_PATH)
            .path_param("route_id", self.route_id.clone())
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref()))
    }
}

/// 更新触发器
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEdgeFunctionsTriggerOptions {
    #[serde(skip)]
    pub route_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl UpdateEdgeFunctionsTriggerOptions {
    pub fn new(route_id: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for UpdateEdgeFunctionsTriggerOptions {
    type Output = GetEdgeFunctionsTriggerResp;
    const NAME: &'static str = "update_edge_functions_trigger";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("route_id", &self.route_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        RequestBuilder::put(ROUTE_PATH)
            .path_param("route_id", self.route_id.clone())
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref())
            .json_body(self)
    }
}

/// 删除触发器
#[derive(Debug, Clone, Default)]
pub struct DeleteEdgeFunctionsTriggerOptions {
    pub route_id: String,
    pub x_correlation_id: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl DeleteEdgeFunctionsTriggerOptions {
    pub fn new(route_id: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.x_correlation_id = Some(id.into());
        self
    }
}

impl Operation for DeleteEdgeFunctionsTriggerOptions {
    type Output = CreateEdgeFunctionsTriggerResp;
    const NAME: &'static str = "delete_edge_functions_trigger";

    fn validate(&self) -> Result<()> {
        RequiredFields::new(Self::NAME)
            .text("route_id", &self.route_id)
            .finish()
    }

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::delete(ROUTE_PATH)
            .path_param("route_id", self.route_id.clone())
            .header(X_CORRELATION_ID, self.x_correlation_id.as_deref()))
    }
}

call_options!(
    ListEdgeFunctionsActionsOptions,
    UpdateEdgeFunctionsActionOptions,
    GetEdgeFunctionsActionOptions,
    DeleteEdgeFunctionsActionOptions,
    CreateEdgeFunctionsTriggerOptions,
    ListEdgeFunctionsTriggersOptions,
    GetEdgeFunctionsTriggerOptions,
    UpdateEdgeFunctionsTriggerOptions,
    DeleteEdgeFunctionsTriggerOptions,
);
