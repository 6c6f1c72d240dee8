//! Product Endpoints

use crate::error::ApiResult;
use crate::models::{Page, Product, ProductDraft, ProductList, SyncReport};

use super::{list_path, ApiClient, ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    pub async fn list_products(&self, page: u32) -> ApiResult<Page<Product>> {
        let list: ProductList = self.fetch(ApiRequest::get(list_path("products", page))).await?;
        Ok(list.into())
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> ApiResult<()> {
        self.execute(ApiRequest::post("/api/products").json(draft)?).await
    }

    pub async fn update_product(&self, id: u32, draft: &ProductDraft) -> ApiResult<()> {
        self.execute(ApiRequest::put(format!("/api/products/{}", id)).json(draft)?).await
    }

    pub async fn delete_product(&self, id: u32) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!("/api/products/{}", id))).await
    }

    pub async fn sync_products(&self) -> ApiResult<SyncReport> {
        self.fetch(ApiRequest::post("/api/products/sync")).await
    }
}
