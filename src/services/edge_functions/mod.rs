//! 边缘函数 (Edge Functions)
//!
//! 脚本（action）挂在实例下，触发器（trigger / route）挂在 zone 下。

mod options;
mod service;
mod types;

pub use options::{
    CreateEdgeFunctionsTriggerOptions, DeleteEdgeFunctionsActionOptions,
    DeleteEdgeFunctionsTriggerOptions, GetEdgeFunctionsActionOptions,
    GetEdgeFunctionsTriggerOptions, ListEdgeFunctionsActionsOptions,
    ListEdgeFunctionsTriggersOptions, UpdateEdgeFunctionsActionOptions,
    UpdateEdgeFunctionsTriggerOptions,
};
pub use types::{
    CreateEdgeFunctionsTriggerResp, EdgeFunctionsAction, EdgeFunctionsActionResp,
    EdgeFunctionsTrigger, GetEdgeFunctionsTriggerResp, ListEdgeFunctionsActionsResp,
    ListEdgeFunctionsTriggersResp, TriggerId,
};

use crate::core::config::ServiceConfig;
use crate::core::service::BaseService;
use crate::error::Result;

pub const DEFAULT_SERVICE_NAME: &str = "edge_functions_api";

pub(crate) const SCRIPTS_PATH: &str = "/v1/{crn}/workers/scripts";
pub(crate) const SCRIPT_PATH: &str = "/v1/{crn}/workers/scripts/{script_name}";
pub(crate) const ROUTES_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/workers/routes";
pub(crate) const ROUTE_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/workers/routes/{route_id}";

pub(crate) const X_CORRELATION_ID: &str = "X-Correlation-ID";
pub(crate) const APPLICATION_JAVASCRIPT: &str = "application/javascript";

/// 边缘函数服务
#[derive(Debug, Clone)]
pub struct EdgeFunctionsService {
    pub(crate) base: BaseService,
}

impl EdgeFunctionsService {
    pub fn new(
        config: ServiceConfig,
        crn: impl Into<String>,
        zone_identifier: impl Into<String>,
    ) -> Result<Self> {
        let base = BaseService::new(config)?.with_scope(vec![
            ("crn", crn.into()),
            ("zone_identifier", zone_identifier.into()),
        ])?;
        Ok(Self { base })
    }

    /// 使用 `EDGE_FUNCTIONS_API_*` 环境变量创建
    pub fn from_env(crn: impl Into<String>, zone_identifier: impl Into<String>) -> Result<Self> {
        Self::new(
            ServiceConfig::from_env(DEFAULT_SERVICE_NAME)?,
            crn,
            zone_identifier,
        )
    }

    pub fn crn(&self) -> &str {
        self.base.scope_value("crn").unwrap_or_default()
    }

    pub fn zone_identifier(&self) -> &str {
        self.base.scope_value("zone_identifier").unwrap_or_default()
    }

    pub fn base(&self) -> &BaseService {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
