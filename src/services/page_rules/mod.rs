//! 页面规则 (Page Rules)

mod actions;
mod options;
mod service;
mod types;

pub use actions::{
    ALWAYS_USE_HTTPS, BROWSER_CACHE_TTL, BROWSER_CHECK, BYPASS_CACHE_ON_COOKIE, CACHE_LEVEL,
    DISABLE_SECURITY, FORWARDING_URL, ForwardingUrl, PageRuleAction, SECURITY_LEVEL, SSL,
};
pub use options::{
    ChangePageRuleOptions, CreatePageRuleOptions, DeletePageRuleOptions, GetPageRuleOptions,
    ListPageRulesOptions, UpdatePageRuleOptions,
};
pub use types::{
    PageRuleId, PageRuleResult, PageRulesDeleteResponse, PageRulesResponseListAll,
    PageRulesResponseWithoutResultInfo, TargetsItem, TargetsItemConstraint,
};

use crate::core::config::ServiceConfig;
use crate::core::service::BaseService;
use crate::error::Result;

pub const DEFAULT_SERVICE_NAME: &str = "page_rule";

pub(crate) const PAGE_RULES_PATH: &str = "/v1/{crn}/zones/{zone_id}/pagerules";
pub(crate) const PAGE_RULE_PATH: &str = "/v1/{crn}/zones/{zone_id}/pagerules/{rule_id}";

/// 页面规则服务
#[derive(Debug, Clone)]
pub struct PageRulesService {
    pub(crate) base: BaseService,
}

impl PageRulesService {
    pub fn new(
        config: ServiceConfig,
        crn: impl Into<String>,
        zone_id: impl Into<String>,
    ) -> Result<Self> {
        let base = BaseService::new(config)?
            .with_scope(vec![("crn", crn.into()), ("zone_id", zone_id.into())])?;
        Ok(Self { base })
    }

    /// 使用 `PAGE_RULE_*` 环境变量创建
    pub fn from_env(crn: impl Into<String>, zone_id: impl Into<String>) -> Result<Self> {
        Self::new(ServiceConfig::from_env(DEFAULT_SERVICE_NAME)?, crn, zone_id)
    }

    pub fn crn(&self) -> &str {
        self.base.scope_value("crn").unwrap_or_default()
    }

    pub fn zone_id(&self) -> &str {
        self.base.scope_value("zone_id").unwrap_or_default()
    }

    pub fn base(&self) -> &BaseService {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
