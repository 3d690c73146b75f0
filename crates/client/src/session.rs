//! # セッション無効化
//!
//! 401 を検出したときの認証トークンの破棄を担当する。
//!
//! ## 設計方針
//!
//! ナビゲーション（ログイン画面への遷移等）はここでは行わない。
//! フェッチャーが [`ApiError::SessionExpired`](crate::ApiError::SessionExpired)
//! を返すことがシグナルであり、画面遷移の判断は呼び出し側の責務。
//! [`SessionObserver`] は集中ハンドリングをしたいアプリ向けの
//! 任意のフックで、トークンが実際に破棄されたときだけ呼ばれる
//! （連続する 401 で繰り返し発火しない）。

use crate::token_store::TokenStore;

/// セッション失効の通知先
///
/// アプリ層がログインプロンプトの表示等を一箇所で行うためのフック。
pub trait SessionObserver: Send + Sync {
    /// 保存されていたトークンが破棄されたときに一度だけ呼ばれる
    fn on_session_expired(&self);
}

/// セッションを無効化する（ベストエフォート）
///
/// - ストアからトークンを削除する（冪等）
/// - ストアのエラーは呼び出し側に伝播しない。握りつぶす代わりに
///   `warn` で診断ログを残す
/// - トークンが実際に存在していた場合のみ `observer` に通知する
pub(crate) fn invalidate_session(store: &dyn TokenStore, observer: Option<&dyn SessionObserver>) {
    let had_token = match store.get() {
        Ok(token) => token.is_some(),
        Err(e) => {
            tracing::warn!("セッション無効化中にトークンの読み取りに失敗しました: {}", e);
            false
        }
    };

    if let Err(e) = store.remove() {
        tracing::warn!("セッション無効化中にトークンの削除に失敗しました: {}", e);
    }

    if had_token && let Some(observer) = observer {
        observer.on_session_expired();
    }
}
