//! # ページネーション付きレスポンス
//!
//! ページ番号ベースのページネーションに対応した API レスポンス型。

use serde::{Deserialize, Serialize};

use crate::pagination::total_pages;

/// ページネーション付きレスポンス
///
/// KanriFlow API のリスト系エンドポイントはすべてこの形式で返す。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "total": 42,
///   "page": 1,
///   "limit": 20,
///   "totalPages": 3
/// }
/// ```
///
/// `totalPages` はサーバー側で `max(ceil(total / limit), 1)` として
/// 計算される（結果が空でも 1 ページと数える）。クライアントは
/// デコード時に検証しない（[`is_consistent`] で任意に確認できる）。
///
/// [`is_consistent`]: PaginatedResponse::is_consistent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data:        Vec<T>,
    pub total:       u64,
    pub page:        u32,
    pub limit:       u32,
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    /// エンベロープの内部整合性を確認する
    ///
    /// 以下をすべて満たすとき `true`:
    ///
    /// - `limit > 0` かつ `total_pages == max(ceil(total / limit), 1)`
    /// - `data.len() <= limit`
    ///
    /// サーバーが正しく実装されていれば常に成立する。デコード時の
    /// 強制検証は行わない方針のため、厳密さが必要な呼び出し側が
    /// 任意に使用する。
    pub fn is_consistent(&self) -> bool {
        self.limit > 0
            && self.total_pages == total_pages(self.total, self.limit).max(1)
            && self.data.len() as u64 <= u64::from(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_deserializeでcamel_caseのtotal_pagesを読む() {
        let json = r#"{"data":[{"id":1}],"page":1,"limit":20,"total":1,"totalPages":1}"#;

        let response: PaginatedResponse<Item> = serde_json::from_str(json).unwrap();

        assert_eq!(response.data, vec![Item { id: 1 }]);
        assert_eq!(response.page, 1);
        assert_eq!(response.limit, 20);
        assert_eq!(response.total, 1);
        assert_eq!(response.total_pages, 1);
    }

    #[test]
    fn test_serializeでtotal_pagesがcamel_caseになる() {
        let response = PaginatedResponse {
            data:        vec![Item { id: 7 }],
            total:       1,
            page:        1,
            limit:       20,
            total_pages: 1,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "data": [{"id": 7}],
                "total": 1,
                "page": 1,
                "limit": 20,
                "totalPages": 1
            })
        );
    }

    #[test]
    fn test_is_consistent_整合したエンベロープでtrue() {
        let response = PaginatedResponse {
            data:        vec![Item { id: 1 }, Item { id: 2 }],
            total:       42,
            page:        1,
            limit:       2,
            total_pages: 21,
        };

        assert!(response.is_consistent());
    }

    #[test]
    fn test_is_consistent_空の結果は1ページと数える() {
        let response = PaginatedResponse {
            data:        Vec::<Item>::new(),
            total:       0,
            page:        1,
            limit:       20,
            total_pages: 1,
        };

        assert!(response.is_consistent());
    }

    #[test]
    fn test_is_consistent_total_pagesが不一致ならfalse() {
        let response = PaginatedResponse {
            data:        Vec::<Item>::new(),
            total:       42,
            page:        1,
            limit:       20,
            total_pages: 5,
        };

        assert!(!response.is_consistent());
    }

    #[test]
    fn test_is_consistent_dataがlimit超過ならfalse() {
        let response = PaginatedResponse {
            data:        vec![Item { id: 1 }, Item { id: 2 }, Item { id: 3 }],
            total:       3,
            page:        1,
            limit:       2,
            total_pages: 2,
        };

        assert!(!response.is_consistent());
    }

    #[test]
    fn test_is_consistent_limitゼロならfalse() {
        let response = PaginatedResponse {
            data:        Vec::<Item>::new(),
            total:       0,
            page:        1,
            limit:       0,
            total_pages: 0,
        };

        assert!(!response.is_consistent());
    }
}
