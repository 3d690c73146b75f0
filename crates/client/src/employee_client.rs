//! # 従業員（人事）API クライアント

use async_trait::async_trait;
use kanriflow_shared::{PaginatedResponse, PaginationParams};
use uuid::Uuid;

use crate::{
    client_impl::KanriClientImpl,
    error::ApiError,
    headers::auth_headers,
    response::handle_response,
    types::EmployeeDto,
};

/// 従業員 API クライアントトレイト
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// 従業員一覧を取得する
    ///
    /// `GET /api/employees?page=<page>&limit=<limit>` を呼び出す。
    /// `search` を指定すると従業員コードで絞り込む。
    async fn list_employees(
        &self,
        params: PaginationParams,
        search: Option<&str>,
    ) -> Result<PaginatedResponse<EmployeeDto>, ApiError>;

    /// 従業員を取得する
    ///
    /// `GET /api/employees/{id}` を呼び出す。
    async fn get_employee(&self, employee_id: Uuid) -> Result<EmployeeDto, ApiError>;
}

#[async_trait]
impl EmployeeApi for KanriClientImpl {
    async fn list_employees(
        &self,
        params: PaginationParams,
        search: Option<&str>,
    ) -> Result<PaginatedResponse<EmployeeDto>, ApiError> {
        let mut url = self.list_url("/api/employees", params);
        if let Some(search) = search {
            url.push_str(&format!("&search={}", urlencoding::encode(search)));
        }
        tracing::debug!("リスト取得: GET {}", url);

        let response = self
            .http
            .get(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .send()
            .await?;
        handle_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }

    async fn get_employee(&self, employee_id: Uuid) -> Result<EmployeeDto, ApiError> {
        let url = format!("{}/api/employees/{}", self.base_url, employee_id);

        let response = self
            .http
            .get(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .send()
            .await?;
        handle_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }
}
