//! # 請求書（販売）API クライアント

use async_trait::async_trait;
use kanriflow_shared::{PaginatedResponse, PaginationParams};
use uuid::Uuid;

use crate::{
    client_impl::KanriClientImpl,
    error::ApiError,
    headers::auth_headers,
    response::handle_response,
    types::InvoiceDto,
};

/// 請求書 API クライアントトレイト
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    /// 請求書一覧を取得する
    ///
    /// `GET /api/invoices?page=<page>&limit=<limit>` を呼び出す。
    async fn list_invoices(
        &self,
        params: PaginationParams,
    ) -> Result<PaginatedResponse<InvoiceDto>, ApiError>;

    /// 請求書を取得する
    ///
    /// `GET /api/invoices/{id}` を呼び出す。
    async fn get_invoice(&self, invoice_id: Uuid) -> Result<InvoiceDto, ApiError>;
}

#[async_trait]
impl InvoiceApi for KanriClientImpl {
    async fn list_invoices(
        &self,
        params: PaginationParams,
    ) -> Result<PaginatedResponse<InvoiceDto>, ApiError> {
        self.fetch_list("/api/invoices", params).await
    }

    async fn get_invoice(&self, invoice_id: Uuid) -> Result<InvoiceDto, ApiError> {
        let url = format!("{}/api/invoices/{}", self.base_url, invoice_id);

        let response = self
            .http
            .get(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .send()
            .await?;
        handle_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }
}
