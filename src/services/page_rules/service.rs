//! 页面规则操作

use crate::core::response::DetailedResponse;
use crate::error::Result;

use super::PageRulesService;
use super::options::{
    ChangePageRuleOptions, CreatePageRuleOptions, DeletePageRuleOptions, GetPageRuleOptions,
    ListPageRulesOptions, UpdatePageRuleOptions,
};
use super::types::{
    PageRulesDeleteResponse, PageRulesResponseListAll, PageRulesResponseWithoutResultInfo,
};

impl PageRulesService {
    /// 列出 zone 下的页面规则
    pub async fn list_page_rules(
        &self,
        options: &ListPageRulesOptions,
    ) -> Result<DetailedResponse<PageRulesResponseListAll>> {
        self.base.invoke(options).await
    }

    pub async fn create_page_rule(
        &self,
        options: &CreatePageRuleOptions,
    ) -> Result<DetailedResponse<PageRulesResponseWithoutResultInfo>> {
        self.base.invoke(options).await
    }

    pub async fn get_page_rule(
        &self,
        options: &GetPageRuleOptions,
    ) -> Result<DetailedResponse<PageRulesResponseWithoutResultInfo>> {
        self.base.invoke(options).await
    }

    /// 部分修改（PATCH）
    pub async fn change_page_rule(
        &self,
        options: &ChangePageRuleOptions,
    ) -> Result<DetailedResponse<PageRulesResponseWithoutResultInfo>> {
        self.base.invoke(options).await
    }

    /// 整体替换（PUT）
    pub async fn update_page_rule(
        &self,
        options: &UpdatePageRuleOptions,
    ) -> Result<DetailedResponse<PageRulesResponseWithoutResultInfo>> {
        self.base.invoke(options).await
    }

    pub async fn delete_page_rule(
        &self,
        options: &DeletePageRuleOptions,
    ) -> Result<DetailedResponse<PageRulesDeleteResponse>> {
        self.base.invoke(options).await
    }
}
