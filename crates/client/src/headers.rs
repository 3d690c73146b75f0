//! # 認証ヘッダーの組み立て
//!
//! すべてのリクエストに付与するヘッダーをトークンストアから構築する。

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::token_store::TokenStore;

/// リクエストヘッダーを組み立てる
///
/// - `Content-Type: application/json` は常に含まれる
/// - ストアにトークンがあれば `Authorization: Bearer <token>` を含める
///
/// ストアの読み取りは副作用を持たない。読み取り失敗は「トークンなし」
/// として扱い（匿名リクエスト）、`warn` で診断ログを残す。
pub fn auth_headers(store: &dyn TokenStore) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let token = match store.get() {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("トークンストアの読み取りに失敗しました: {}", e);
            None
        }
    };

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => {
                // 制御文字等を含むトークンはヘッダーにできない
                tracing::warn!("不正なトークンのため Authorization を省略します: {}", e);
            }
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::token_store::{InMemoryTokenStore, TokenStoreError};

    #[test]
    fn test_トークンなしではauthorizationを含まない() {
        let store = InMemoryTokenStore::new();

        let headers = auth_headers(&store);

        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap().to_str().unwrap(),
            "application/json"
        );
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_トークンありではbearer形式になる() {
        let store = InMemoryTokenStore::with_token("abc123");

        let headers = auth_headers(&store);

        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer abc123"
        );
    }

    #[test]
    fn test_ストア読み取り失敗は匿名リクエスト扱い() {
        struct FailingStore;

        impl TokenStore for FailingStore {
            fn get(&self) -> Result<Option<String>, TokenStoreError> {
                Err(TokenStoreError::Io("disk on fire".to_string()))
            }

            fn set(&self, _token: &str) -> Result<(), TokenStoreError> {
                unreachable!()
            }

            fn remove(&self) -> Result<(), TokenStoreError> {
                unreachable!()
            }
        }

        let headers = auth_headers(&FailingStore);

        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get(CONTENT_TYPE).is_some());
    }

    #[test]
    fn test_改行入りトークンはauthorizationを省略する() {
        let store = InMemoryTokenStore::with_token("bad\ntoken");

        let headers = auth_headers(&store);

        assert!(headers.get(AUTHORIZATION).is_none());
    }
}
