//! Category Endpoints

use crate::error::ApiResult;
use crate::models::{Category, CategoryDraft, CategoryList, Page, SyncReport};

use super::{list_path, ApiClient, ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    pub async fn list_categories(&self, page: u32) -> ApiResult<Page<Category>> {
        let list: CategoryList = self.fetch(ApiRequest::get(list_path("categories", page))).await?;
        Ok(list.into())
    }

    pub async fn create_category(&self, draft: &CategoryDraft) -> ApiResult<()> {
        self.execute(ApiRequest::post("/api/categories").json(draft)?).await
    }

    pub async fn update_category(&self, id: u32, draft: &CategoryDraft) -> ApiResult<()> {
        self.execute(ApiRequest::put(format!("/api/categories/{}", id)).json(draft)?).await
    }

    pub async fn delete_category(&self, id: u32) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!("/api/categories/{}", id))).await
    }

    pub async fn sync_categories(&self) -> ApiResult<SyncReport> {
        self.fetch(ApiRequest::post("/api/categories/sync")).await
    }
}
