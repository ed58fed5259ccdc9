//! 限速规则 (Zone Rate Limits)

mod options;
mod service;
mod types;

pub use options::{
    CreateZoneRateLimitsOptions, DeleteZoneRateLimitOptions, GetRateLimitOptions,
    ListAllZoneRateLimitsOptions, UpdateRateLimitOptions,
};
pub use types::{
    DeleteRateLimitResp, ListRatelimitResp, RatelimitId, RatelimitInputAction,
    RatelimitInputActionResponse, RatelimitInputBypassItem, RatelimitInputCorrelate,
    RatelimitInputMatch, RatelimitInputMatchRequest, RatelimitInputMatchResponse,
    RatelimitInputMatchResponseHeadersItem, RatelimitObject, RatelimitResp,
};

use crate::core::config::ServiceConfig;
use crate::core::service::BaseService;
use crate::error::Result;

pub const DEFAULT_SERVICE_NAME: &str = "zone_rate_limits";

pub(crate) const RATE_LIMITS_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/rate_limits";
pub(crate) const RATE_LIMIT_PATH: &str =
    "/v1/{crn}/zones/{zone_identifier}/rate_limits/{rate_limit_identifier}";

/// 限速规则服务
#[derive(Debug, Clone)]
pub struct RateLimitsService {
    pub(crate) base: BaseService,
}

impl RateLimitsService {
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

    /// 使用 `ZONE_RATE_LIMITS_*` 环境变量创建
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
