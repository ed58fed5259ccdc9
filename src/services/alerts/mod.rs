//! 告警策略 (Alert Policies)

mod options;
mod service;
mod types;

pub use options::{
    CreateAlertPolicyOptions, DeleteAlertPolicyOptions, GetAlertPoliciesOptions,
    GetAlertPolicyOptions, UpdateAlertPolicyOptions,
};
pub use types::{
    AlertPolicy, AlertPolicyId, AlertSuccessResp, GetAlertPolicyResp, ListAlertPoliciesResp,
    MechanismTarget, Mechanisms,
};

use crate::core::config::ServiceConfig;
use crate::core::service::BaseService;
use crate::error::Result;

pub const DEFAULT_SERVICE_NAME: &str = "alerts";

pub(crate) const ALERT_POLICIES_PATH: &str = "/v1/{crn}/alerting/policies";
pub(crate) const ALERT_POLICY_PATH: &str = "/v1/{crn}/alerting/policies/{policy_id}";

/// 告警策略服务
#[derive(Debug, Clone)]
pub struct AlertsService {
    pub(crate) base: BaseService,
}

impl AlertsService {
    pub fn new(config: ServiceConfig, crn: impl Into<String>) -> Result<Self> {
        let base = BaseService::new(config)?.with_scope(vec![("crn", crn.into())])?;
        Ok(Self { base })
    }

    /// 使用 `ALERTS_*` 环境变量创建
    pub fn from_env(crn: impl Into<String>) -> Result<Self> {
        Self::new(ServiceConfig::from_env(DEFAULT_SERVICE_NAME)?, crn)
    }

    pub fn crn(&self) -> &str {
        self.base.scope_value("crn").unwrap_or_default()
    }

    pub fn base(&self) -> &BaseService {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
