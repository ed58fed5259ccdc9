//! 限速规则操作

use crate::core::response::DetailedResponse;
use crate::error::Result;

use super::RateLimitsService;
use super::options::{
    CreateZoneRateLimitsOptions, DeleteZoneRateLimitOptions, GetRateLimitOptions,
    ListAllZoneRateLimitsOptions, UpdateRateLimitOptions,
};
use super::types::{DeleteRateLimitResp, ListRatelimitResp, RatelimitResp};

impl RateLimitsService {
    /// 分页列出限速规则，分页信息在 `result_info` 中
    pub async fn list_all_zone_rate_limits(
        &self,
        options: &ListAllZoneRateLimitsOptions,
    ) -> Result<DetailedResponse<ListRatelimitResp>> {
        self.base.invoke(options).await
    }

    pub async fn create_zone_rate_limits(
        &self,
        options: &CreateZoneRateLimitsOptions,
    ) -> Result<DetailedResponse<RatelimitResp>> {
        self.base.invoke(options).await
    }

    pub async fn get_rate_limit(
        &self,
        options: &GetRateLimitOptions,
    ) -> Result<DetailedResponse<RatelimitResp>> {
        self.base.invoke(options).await
    }

    pub async fn update_rate_limit(
        &self,
        options: &UpdateRateLimitOptions,
    ) -> Result<DetailedResponse<RatelimitResp>> {
        self.base.invoke(options).await
    }

    pub async fn delete_zone_rate_limit(
        &self,
        options: &DeleteZoneRateLimitOptions,
    ) -> Result<DetailedResponse<DeleteRateLimitResp>> {
        self.base.invoke(options).await
    }
}
