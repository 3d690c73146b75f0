//! # クライアント設定
//!
//! 環境変数から API クライアントの設定を読み込む。
//!
//! 環境の読み取りはバイナリのエントリーポイントで一度だけ行い、
//! ライブラリ内部からは行わない。ライブラリは常に明示的な
//! [`ApiConfig`] を受け取る。

use std::env;

/// API のデフォルトベース URL（ローカル開発用）
const DEFAULT_API_BASE: &str = "http://127.0.0.1:3001";

/// API クライアントの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// KanriFlow API のベース URL（末尾スラッシュなし）
    pub base_url: String,
}

impl ApiConfig {
    /// ベース URL を明示指定して設定を作成する
    ///
    /// 末尾のスラッシュは取り除かれる。
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 環境変数から設定を読み込む
    ///
    /// `API_BASE` が未設定の場合はローカルループバック
    /// （`http://127.0.0.1:3001`）にフォールバックする。
    pub fn from_env() -> Self {
        let base_url = env::var("API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(&base_url)
    }
}
