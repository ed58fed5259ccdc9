//! 过滤器操作

use crate::core::response::DetailedResponse;
use crate::error::Result;

use super::FiltersService;
use super::options::{
    CreateFilterOptions, DeleteFilterOptions, DeleteFiltersOptions, GetFilterOptions,
    ListAllFiltersOptions, UpdateFilterOptions, UpdateFiltersOptions,
};
use super::types::{DeleteFilterResp, DeleteFiltersResp, FilterResp, FiltersResp, ListFiltersResp};

impl FiltersService {
    /// 列出 zone 下的所有过滤器
    pub async fn list_all_filters(
        &self,
        options: &ListAllFiltersOptions,
    ) -> Result<DetailedResponse<ListFiltersResp>> {
        self.base.invoke(options).await
    }

    /// 批量创建过滤器
    ///
    /// 响应不是 JSON 时 `result` 为 `None`，原始 body 保留在 `raw` 中。
    pub async fn create_filter(
        &self,
        options: &CreateFilterOptions,
    ) -> Result<DetailedResponse<FiltersResp>> {
        self.base.invoke(options).await
    }

    pub async fn update_filters(
        &self,
        options: &UpdateFiltersOptions,
    ) -> Result<DetailedResponse<FiltersResp>> {
        self.base.invoke(options).await
    }

    pub async fn delete_filters(
        &self,
        options: &DeleteFiltersOptions,
    ) -> Result<DetailedResponse<DeleteFiltersResp>> {
        self.base.invoke(options).await
    }

    pub async fn get_filter(
        &self,
        options: &GetFilterOptions,
    ) -> Result<DetailedResponse<FilterResp>> {
        self.base.invoke(options).await
    }

    pub async fn update_filter(
        &self,
        options: &UpdateFilterOptions,
    ) -> Result<DetailedResponse<FilterResp>> {
        self.base.invoke(options).await
    }

    pub async fn delete_filter(
        &self,
        options: &DeleteFilterOptions,
    ) -> Result<DetailedResponse<DeleteFilterResp>> {
        self.base.invoke(options).await
    }
}
