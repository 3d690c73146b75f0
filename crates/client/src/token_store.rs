//! # 認証トークンの永続化ポート
//!
//! クライアント側に保持するベアラートークンの読み書きを抽象化する。
//! テスト時にはインメモリ実装を注入できる。

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// トークンストアのエラー
#[derive(Debug, Clone, Error)]
pub enum TokenStoreError {
    /// 読み書きに失敗した
    #[error("トークンストアの入出力に失敗しました: {0}")]
    Io(String),

    /// 保存内容が壊れている
    #[error("トークンストアの内容が不正です: {0}")]
    Corrupt(String),
}

/// 認証トークンの永続化ポート
///
/// 実装は並行アクセスに対して安全であること。`remove` は冪等で、
/// トークンが存在しない状態で呼んでも成功する。
pub trait TokenStore: Send + Sync {
    /// 保存されているトークンを読み取る
    fn get(&self) -> Result<Option<String>, TokenStoreError>;

    /// トークンを保存する（既存の値は上書き）
    fn set(&self, token: &str) -> Result<(), TokenStoreError>;

    /// トークンを削除する（冪等）
    fn remove(&self) -> Result<(), TokenStoreError>;
}

/// インメモリ実装
///
/// テストおよび永続化不要な用途向け。
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl InMemoryTokenStore {
    /// 空のストアを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期トークン入りのストアを作成する
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        *self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), TokenStoreError> {
        *self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}

/// ファイルの保存形式
///
/// 単一キー `token` を持つ JSON オブジェクト。
#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// ファイルベースの実装
///
/// プロセスの再起動をまたいでトークンを保持する。保存形式は
/// `{ "token": "<credential>" }` の JSON ファイル。
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// 保存先パスを指定してストアを作成する
    ///
    /// ファイルは最初の `set` まで作成されない。
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 保存先パス
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>, TokenStoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TokenStoreError::Io(e.to_string())),
        };

        let stored: StoredToken = serde_json::from_str(&contents)
            .map_err(|e| TokenStoreError::Corrupt(e.to_string()))?;
        Ok(Some(stored.token))
    }

    fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| TokenStoreError::Io(e.to_string()))?;
        }

        let stored = StoredToken {
            token: token.to_string(),
        };
        let contents = serde_json::to_string(&stored)
            .map_err(|e| TokenStoreError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| TokenStoreError::Io(e.to_string()))
    }

    fn remove(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            // 存在しない場合も成功扱い（冪等）
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_インメモリ_setしたトークンをgetで読める() {
        let store = InMemoryTokenStore::new();

        store.set("abc123").unwrap();

        assert_eq!(store.get().unwrap(), Some("abc123".to_string()));
    }

    #[test]
    fn test_インメモリ_空のストアはnoneを返す() {
        let store = InMemoryTokenStore::new();

        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_インメモリ_removeは冪等() {
        let store = InMemoryTokenStore::with_token("abc123");

        store.remove().unwrap();
        store.remove().unwrap();

        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_ファイル_setとgetのラウンドトリップ() {
        let dir = std::env::temp_dir().join(format!("kanriflow-test-{}", uuid::Uuid::new_v4()));
        let store = FileTokenStore::new(dir.join("token.json"));

        store.set("file-token").unwrap();

        assert_eq!(store.get().unwrap(), Some("file-token".to_string()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_ファイル_存在しないファイルはnone() {
        let store = FileTokenStore::new("/nonexistent/kanriflow/token.json");

        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_ファイル_removeは存在しなくても成功する() {
        let store = FileTokenStore::new("/nonexistent/kanriflow/token.json");

        assert!(store.remove().is_ok());
    }

    #[test]
    fn test_ファイル_保存形式は単一キーtokenのjson() {
        let dir = std::env::temp_dir().join(format!("kanriflow-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join("token.json");
        let store = FileTokenStore::new(&path);

        store.set("abc").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json, serde_json::json!({ "token": "abc" }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_ファイル_壊れた内容はcorruptエラー() {
        let dir = std::env::temp_dir().join(format!("kanriflow-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join("token.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not json").unwrap();
        let store = FileTokenStore::new(&path);

        assert!(matches!(store.get(), Err(TokenStoreError::Corrupt(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
