//! # KanriFlow 共有ユーティリティ
//!
//! このクレートは、KanriFlow クライアントワークスペース全体で使用される
//! ワイヤ型と共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋な型・ユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（serde のみ必須）
//! - トレーシング基盤は `observability` feature でオプトイン

#[cfg(feature = "observability")]
pub mod observability;
pub mod paginated_response;
pub mod pagination;

pub use paginated_response::PaginatedResponse;
pub use pagination::PaginationParams;
