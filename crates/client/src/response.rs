//! # レスポンスの共通ハンドリング

use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    session::{SessionObserver, invalidate_session},
    token_store::TokenStore,
};

/// KanriFlow API レスポンスの共通ハンドリング
///
/// - 401: セッションを無効化し [`ApiError::SessionExpired`] を返す。
///   ボディの JSON パースは行わない
/// - その他の失敗ステータス: ボディのテキストをそのまま
///   [`ApiError::Request`] に載せて返す
/// - 成功: ボディを `T` にデシリアライズする
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
    store: &dyn TokenStore,
    observer: Option<&dyn SessionObserver>,
) -> Result<T, ApiError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        invalidate_session(store, observer);
        return Err(ApiError::SessionExpired);
    }

    if status.is_success() {
        let body = response.json::<T>().await?;
        return Ok(body);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Request(body))
}

/// ボディを捨てるレスポンスハンドリング
///
/// ログアウト等、成功時のボディに関心がない操作で使用する。
/// ステータスの扱いは [`handle_response`] と同じ。
pub(crate) async fn handle_empty_response(
    response: reqwest::Response,
    store: &dyn TokenStore,
    observer: Option<&dyn SessionObserver>,
) -> Result<(), ApiError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        invalidate_session(store, observer);
        return Err(ApiError::SessionExpired);
    }

    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Request(body))
}
