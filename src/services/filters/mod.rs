//! 过滤器 (Filters)
//!
//! 过滤器接口不绑定固定的实例或 zone：每次调用都在参数中携带
//! `x_auth_user_token`、`crn` 和 `zone_identifier`。

mod options;
mod service;
mod types;

pub use options::{
    CreateFilterOptions, DeleteFilterOptions, DeleteFiltersOptions, GetFilterOptions,
    ListAllFiltersOptions, UpdateFilterOptions, UpdateFiltersOptions,
};
pub use types::{
    DeleteFilterId, DeleteFilterResp, DeleteFiltersResp, FilterInput, FilterObject, FilterResp,
    FilterUpdateInput, FiltersResp, ListFiltersResp,
};

use crate::core::config::ServiceConfig;
use crate::core::service::BaseService;
use crate::error::Result;

pub const DEFAULT_SERVICE_NAME: &str = "filters";

pub(crate) const FILTERS_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/filters";
pub(crate) const FILTER_PATH: &str =
    "/v1/{crn}/zones/{zone_identifier}/filters/{filter_identifier}";

pub(crate) const X_AUTH_USER_TOKEN: &str = "X-Auth-User-Token";

/// 过滤器服务
#[derive(Debug, Clone)]
pub struct FiltersService {
    pub(crate) base: BaseService,
}

impl FiltersService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        Ok(Self {
            base: BaseService::new(config)?,
        })
    }

    /// 使用 `FILTERS_*` 环境变量创建
    pub fn from_env() -> Result<Self> {
        Self::new(ServiceConfig::from_env(DEFAULT_SERVICE_NAME)?)
    }

    pub fn base(&self) -> &BaseService {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
