//! # 商品（在庫）API クライアント

use async_trait::async_trait;
use kanriflow_shared::{PaginatedResponse, PaginationParams};
use uuid::Uuid;

use crate::{
    client_impl::KanriClientImpl,
    error::ApiError,
    headers::auth_headers,
    response::{handle_empty_response, handle_response},
    types::{CreateProductRequest, ProductDto, UpdateProductRequest},
};

/// 商品 API クライアントトレイト
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// 商品一覧を取得する
    ///
    /// `GET /api/products?page=<page>&limit=<limit>` を呼び出す。
    async fn list_products(
        &self,
        params: PaginationParams,
    ) -> Result<PaginatedResponse<ProductDto>, ApiError>;

    /// 商品を取得する
    ///
    /// `GET /api/products/{id}` を呼び出す。
    async fn get_product(&self, product_id: Uuid) -> Result<ProductDto, ApiError>;

    /// 商品を作成する
    ///
    /// `POST /api/products` を呼び出す。
    async fn create_product(&self, req: &CreateProductRequest) -> Result<ProductDto, ApiError>;

    /// 商品を更新する
    ///
    /// `PUT /api/products/{id}` を呼び出す。
    async fn update_product(
        &self,
        product_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ProductDto, ApiError>;

    /// 商品を削除する
    ///
    /// `DELETE /api/products/{id}` を呼び出す。
    async fn delete_product(&self, product_id: Uuid) -> Result<(), ApiError>;
}

#[async_trait]
impl ProductApi for KanriClientImpl {
    async fn list_products(
        &self,
        params: PaginationParams,
    ) -> Result<PaginatedResponse<ProductDto>, ApiError> {
        self.fetch_list("/api/products", params).await
    }

    async fn get_product(&self, product_id: Uuid) -> Result<ProductDto, ApiError> {
        let url = format!("{}/api/products/{}", self.base_url, product_id);

        let response = self
            .http
            .get(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .send()
            .await?;
        handle_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }

    async fn create_product(&self, req: &CreateProductRequest) -> Result<ProductDto, ApiError> {
        let url = format!("{}/api/products", self.base_url);

        let response = self
            .http
            .post(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .json(req)
            .send()
            .await?;
        handle_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ProductDto, ApiError> {
        let url = format!("{}/api/products/{}", self.base_url, product_id);

        let response = self
            .http
            .put(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .json(req)
            .send()
            .await?;
        handle_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ApiError> {
        let url = format!("{}/api/products/{}", self.base_url, product_id);

        let response = self
            .http
            .delete(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .send()
            .await?;
        handle_empty_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }
}
