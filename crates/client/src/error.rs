//! # API クライアントのエラー型

use thiserror::Error;

/// KanriFlow API クライアントエラー
///
/// トークンストアの障害はここには現れない（セッション無効化は
/// ベストエフォートで、失敗しても呼び出し側に伝播しない）。
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// セッション失効（401）
    ///
    /// トークンの破棄後に返される。呼び出し側は再ログインへ誘導する。
    #[error("セッションの有効期限が切れました。再度ログインしてください")]
    SessionExpired,

    /// ログイン失敗（ログインエンドポイントの 401）
    ///
    /// セッション失効とは区別される。トークンは破棄されない。
    #[error("メールアドレスまたはパスワードが正しくありません")]
    AuthenticationFailed,

    /// その他の失敗ステータス
    ///
    /// レスポンスボディをそのままメッセージとして保持する。
    #[error("リクエストに失敗しました: {0}")]
    Request(String),

    /// ネットワークエラー（接続・デコード失敗を含む）
    #[error("ネットワークエラー: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
