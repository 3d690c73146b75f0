//! # KanriFlow API クライアント
//!
//! KanriFlow ERP バックエンド（在庫・販売・人事・会計）の型付き REST
//! クライアント。
//!
//! ## モジュール構成
//!
//! - `config`: ベース URL 等のクライアント設定
//! - `token_store`: 認証トークンの永続化ポート
//! - `headers`: 認証ヘッダーの組み立て
//! - `session`: 401 検出時のセッション無効化
//! - `response`: HTTP レスポンスの共通ハンドリング
//! - `client_impl` + 各リソースクライアント: 型付き API 呼び出し
//!
//! ## 設計方針
//!
//! リダイレクト等のナビゲーションはこのクレートの責務外。セッション
//! 失効は [`ApiError::SessionExpired`] として呼び出し側に返し、対応
//! （ログイン画面への誘導等）は呼び出し側が決める。

pub mod auth_client;
pub mod client_impl;
pub mod config;
pub mod employee_client;
pub mod error;
pub mod headers;
pub mod invoice_client;
pub mod product_client;
pub(crate) mod response;
pub mod session;
pub mod token_store;
pub mod types;

pub use auth_client::AuthApi;
pub use client_impl::{KanriClient, KanriClientImpl};
pub use config::ApiConfig;
pub use employee_client::EmployeeApi;
pub use error::ApiError;
pub use invoice_client::InvoiceApi;
pub use product_client::ProductApi;
pub use session::SessionObserver;
pub use token_store::{FileTokenStore, InMemoryTokenStore, TokenStore, TokenStoreError};
pub use types::{
    CreateProductRequest,
    EmployeeDto,
    InvoiceDto,
    LoginRequest,
    LoginResponse,
    ProductDto,
    UpdateProductRequest,
    UserDto,
};
