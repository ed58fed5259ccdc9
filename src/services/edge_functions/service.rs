//! 边缘函数操作

use crate::core::response::DetailedResponse;
use crate::error::Result;

use super::EdgeFunctionsService;
use super::options::{
    CreateEdgeFunctionsTriggerOptions, DeleteEdgeFunctionsActionOptions,
    DeleteEdgeFunctionsTriggerOptions, GetEdgeFunctionsActionOptions,
    GetEdgeFunctionsTriggerOptions, ListEdgeFunctionsActionsOptions,
    ListEdgeFunctionsTriggersOptions, UpdateEdgeFunctionsActionOptions,
    UpdateEdgeFunctionsTriggerOptions,
};
use super::types::{
    CreateEdgeFunctionsTriggerResp, EdgeFunctionsActionResp, GetEdgeFunctionsTriggerResp,
    ListEdgeFunctionsActionsResp, ListEdgeFunctionsTriggersResp,
};

impl EdgeFunctionsService {
    /// 列出实例下的所有脚本
    pub async fn list_edge_functions_actions(
        &self,
        options: &ListEdgeFunctionsActionsOptions,
    ) -> Result<DetailedResponse<ListEdgeFunctionsActionsResp>> {
        self.base.invoke(options).await
    }

    /// 上传脚本
    pub async fn update_edge_functions_action(
        &self,
        options: &UpdateEdgeFunctionsActionOptions,
    ) -> Result<DetailedResponse<EdgeFunctionsActionResp>> {
        self.base.invoke(options).await
    }

    /// 下载脚本，`result` 为脚本原始内容
    pub async fn get_edge_functions_action(
        &self,
        options: &GetEdgeFunctionsActionOptions,
    ) -> Result<DetailedResponse<Vec<u8>>> {
        self.base.invoke(options).await
    }

    pub async fn delete_edge_functions_action(
        &self,
        options: &DeleteEdgeFunctionsActionOptions,
    ) -> Result<DetailedResponse<EdgeFunctionsActionResp>> {
        self.base.invoke(options).await
    }

    pub async fn create_edge_functions_trigger(
        &self,
        options: &CreateEdgeFunctionsTriggerOptions,
    ) -> Result<DetailedResponse<CreateEdgeFunctionsTriggerResp>> {
        self.base.invoke(options).await
    }

    pub async fn list_edge_functions_triggers(
        &self,
        options: &ListEdgeFunctionsTriggersOptions,
    ) -> Result<DetailedResponse<ListEdgeFunctionsTriggersResp>> {
        self.base.invoke(options).await
    }

    pub async fn get_edge_functions_trigger(
        &self,
        options: &GetEdgeFunctionsTriggerOptions,
    ) -> Result<DetailedResponse<GetEdgeFunctionsTriggerResp>> {
        self.base.invoke(options).await
    }

    pub async fn update_edge_functions_trigger(
        &self,
        options: &UpdateEdgeFunctionsTriggerOptions,
    ) -> Result<DetailedResponse<GetEdgeFunctionsTriggerResp>> {
        self.base.invoke(options).await
    }

    pub async fn delete_edge_functions_trigger(
        &self,
        options: &DeleteEdgeFunctionsTriggerOptions,
    ) -> Result<DetailedResponse<CreateEdgeFunctionsTriggerResp>> {
        self.base.invoke(options).await
    }
}
