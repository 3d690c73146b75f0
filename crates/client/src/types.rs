//! # KanriFlow API の DTO / リクエスト型
//!
//! ワイヤ表現は JSON の camelCase。ID は UUID、日時はサーバーが返す
//! ISO 8601 文字列をそのまま保持する。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- 認証 ---

/// ログインリクエスト
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email:    String,
    pub password: String,
}

/// ログインレスポンス
///
/// `token` はベアラートークンで、クライアントがトークンストアに保存する。
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user:  UserDto,
}

/// ユーザー情報 DTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id:        Uuid,
    pub email:     String,
    pub full_name: String,
    pub phone:     Option<String>,
    pub role:      Option<String>,
}

// --- 商品（在庫） ---

/// 商品 DTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id:             Uuid,
    pub name:           String,
    pub sku:            Option<String>,
    pub sale_price:     f64,
    pub buy_price:      Option<f64>,
    pub stock_quantity: i64,
    pub is_active:      bool,
    pub created_at:     String,
}

/// 商品作成リクエスト
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name:           String,
    pub sku:            Option<String>,
    pub sale_price:     f64,
    pub buy_price:      Option<f64>,
    pub stock_quantity: Option<i64>,
}

/// 商品更新リクエスト
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:           Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price:     Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
}

// --- 請求書（販売・会計） ---

/// 請求書 DTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub id:               Uuid,
    pub invoice_number:   String,
    #[serde(rename = "type")]
    pub invoice_type:     String,
    pub payment_type:     String,
    pub total:            f64,
    pub status:           String,
    pub payment_status:   String,
    pub paid_amount:      f64,
    pub remaining_amount: f64,
    pub created_at:       String,
}

// --- 従業員（人事） ---

/// 従業員 DTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id:            Uuid,
    pub employee_code: String,
    pub full_name:     String,
    pub department:    Option<String>,
    pub position:      Option<String>,
    pub status:        String,
    pub created_at:    String,
}
