//! # ページネーションパラメータ
//!
//! リスト取得リクエストのページ指定と、そのデフォルト値を提供する。

use serde::{Deserialize, Serialize};

/// デフォルトのページ番号
pub const DEFAULT_PAGE: u32 = 1;

/// デフォルトの 1 ページあたり件数
pub const DEFAULT_LIMIT: u32 = 20;

/// リスト取得のページネーションパラメータ
///
/// 両フィールドとも省略可能。省略時はフェッチャーが
/// [`DEFAULT_PAGE`] / [`DEFAULT_LIMIT`] を適用する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page:  Option<u32>,
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// ページ番号と件数を明示指定する
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page:  Some(page),
            limit: Some(limit),
        }
    }

    /// ページ番号のみ指定する（件数はデフォルト）
    pub fn page(page: u32) -> Self {
        Self {
            page:  Some(page),
            limit: None,
        }
    }

    /// デフォルト適用後のページ番号
    pub fn page_or_default(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// デフォルト適用後の件数
    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// 総ページ数を計算する
///
/// `ceil(total / limit)`。`limit == 0` のときは 0 を返す
/// （その場合エンベロープは整合と見なされない）。
pub fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(u64::from(limit))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_デフォルトはpage1_limit20() {
        let params = PaginationParams::default();

        assert_eq!(params.page_or_default(), 1);
        assert_eq!(params.limit_or_default(), 20);
    }

    #[test]
    fn test_明示指定がデフォルトより優先される() {
        let params = PaginationParams::new(3, 50);

        assert_eq!(params.page_or_default(), 3);
        assert_eq!(params.limit_or_default(), 50);
    }

    #[test]
    fn test_page指定のみではlimitがデフォルトのまま() {
        let params = PaginationParams::page(5);

        assert_eq!(params.page_or_default(), 5);
        assert_eq!(params.limit_or_default(), 20);
    }

    #[test]
    fn test_total_pagesは切り上げ() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(42, 20), 3);
    }

    #[test]
    fn test_total_pagesはlimitゼロで0() {
        assert_eq!(total_pages(10, 0), 0);
    }
}
