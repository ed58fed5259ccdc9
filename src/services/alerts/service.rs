//! 告警策略操作

use crate::core::response::DetailedResponse;
use crate::error::Result;

use super::AlertsService;
use super::options::{
    CreateAlertPolicyOptions, DeleteAlertPolicyOptions, GetAlertPoliciesOptions,
    GetAlertPolicyOptions, UpdateAlertPolicyOptions,
};
use super::types::{AlertSuccessResp, GetAlertPolicyResp, ListAlertPoliciesResp};

impl AlertsService {
    /// 列出实例下的所有告警策略
    pub async fn get_alert_policies(
        &self,
        options: &GetAlertPoliciesOptions,
    ) -> Result<DetailedResponse<ListAlertPoliciesResp>> {
        self.base.invoke(options).await
    }

    /// 创建告警策略
    pub async fn create_alert_policy(
        &self,
        options: &CreateAlertPolicyOptions,
    ) -> Result<DetailedResponse<AlertSuccessResp>> {
        self.base.invoke(options).await
    }

    /// 获取告警策略
    pub async fn get_alert_policy(
        &self,
        options: &GetAlertPolicyOptions,
    ) -> Result<DetailedResponse<GetAlertPolicyResp>> {
        self.base.invoke(options).await
    }

    /// 更新告警策略（部分更新，只发送已设置的字段）
    pub async fn update_alert_policy(
        &self,
        options: &UpdateAlertPolicyOptions,
    ) -> Result<DetailedResponse<AlertSuccessResp>> {
        self.base.invoke(options).await
    }

    /// 删除告警策略
    pub async fn delete_alert_policy(
        &self,
        options: &DeleteAlertPolicyOptions,
    ) -> Result<DetailedResponse<AlertSuccessResp>> {
        self.base.invoke(options).await
    }
}
