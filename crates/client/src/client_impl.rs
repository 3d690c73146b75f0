//! # KanriClient スーパートレイトとクライアント実装の構造体

use std::sync::Arc;

use kanriflow_shared::{PaginatedResponse, PaginationParams};
use serde::de::DeserializeOwned;

use crate::{
    auth_client::AuthApi,
    config::ApiConfig,
    employee_client::EmployeeApi,
    error::ApiError,
    headers::auth_headers,
    invoice_client::InvoiceApi,
    product_client::ProductApi,
    response::handle_response,
    session::SessionObserver,
    token_store::TokenStore,
};

/// KanriFlow API クライアントトレイト（スーパートレイト）
///
/// Auth / Product / Invoice / Employee の各サブトレイトを束ねる。
/// テスト時にはサブトレイト単位でスタブを使用できる。
///
/// `dyn KanriClient` はオブジェクトセーフであり、
/// `Arc<dyn KanriClient>` として使用可能。
pub trait KanriClient: AuthApi + ProductApi + InvoiceApi + EmployeeApi {}

/// ブランケット impl: 4 つのサブトレイトをすべて実装する型は
/// 自動的に `KanriClient` を実装する。
impl<T> KanriClient for T where T: AuthApi + ProductApi + InvoiceApi + EmployeeApi {}

/// KanriFlow API クライアント実装
#[derive(Clone)]
pub struct KanriClientImpl {
    pub(crate) base_url:    String,
    pub(crate) http:        reqwest::Client,
    pub(crate) token_store: Arc<dyn TokenStore>,
    pub(crate) observer:    Option<Arc<dyn SessionObserver>>,
}

impl KanriClientImpl {
    /// 新しいクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `config`: ベース URL 等の設定（エントリーポイントで一度だけ
    ///   環境から読み込んだもの）
    /// - `token_store`: 認証トークンの永続化先
    pub fn new(config: &ApiConfig, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token_store,
            observer: None,
        }
    }

    /// セッション失効オブザーバーを設定する
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// リスト取得 URL を構築する
    ///
    /// `<base><endpoint>?page=<page>&limit=<limit>`。
    /// 省略されたパラメータにはデフォルト（page=1, limit=20）を適用する。
    pub(crate) fn list_url(&self, endpoint: &str, params: PaginationParams) -> String {
        format!(
            "{}{}?page={}&limit={}",
            self.base_url,
            endpoint,
            params.page_or_default(),
            params.limit_or_default()
        )
    }

    /// ページネーション付きリストを取得する
    ///
    /// すべてのリスト系エンドポイントの共通経路。401 ではトークンを
    /// 破棄して [`ApiError::SessionExpired`] を返す。リトライ・
    /// タイムアウト・キャンセルはこの層では行わない（必要なら呼び出し
    /// 側でラップする）。
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: PaginationParams,
    ) -> Result<PaginatedResponse<T>, ApiError> {
        let url = self.list_url(endpoint, params);
        tracing::debug!("リスト取得: GET {}", url);

        let response = self
            .http
            .get(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .send()
            .await?;

        handle_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }

    pub(crate) fn observer_ref(&self) -> Option<&dyn SessionObserver> {
        self.observer.as_deref()
    }
}
