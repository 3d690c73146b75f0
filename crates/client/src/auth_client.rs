//! # 認証 API クライアント
//!
//! KanriFlow API の認証エンドポイントを呼び出す。
//!
//! ## エンドポイント
//!
//! - `POST /api/auth/login` - ログイン（トークン発行）
//! - `POST /api/auth/logout` - ログアウト
//! - `GET /api/auth/me` - ログイン中ユーザーの取得

use async_trait::async_trait;

use crate::{
    client_impl::KanriClientImpl,
    error::ApiError,
    headers::auth_headers,
    response::handle_response,
    types::{LoginRequest, LoginResponse, UserDto},
};

/// 認証 API クライアントトレイト
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// ログインする
    ///
    /// 成功時は発行されたトークンをトークンストアに保存する。
    /// 401 は [`ApiError::AuthenticationFailed`]（資格情報の誤り）で、
    /// セッション失効とは区別される。
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// ログアウトする
    ///
    /// サーバーの応答に関わらず、ローカルのトークンは破棄する。
    async fn logout(&self) -> Result<(), ApiError>;

    /// ログイン中のユーザー情報を取得する
    async fn me(&self) -> Result<UserDto, ApiError>;
}

#[async_trait]
impl AuthApi for KanriClientImpl {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let request = LoginRequest {
            email:    email.to_string(),
            password: password.to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.json::<LoginResponse>().await?;
                if let Err(e) = self.token_store.set(&body.token) {
                    // 保存失敗でもログイン自体は成立している
                    tracing::warn!("トークンの保存に失敗しました: {}", e);
                }
                Ok(body)
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(ApiError::AuthenticationFailed),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Request(body))
            }
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = format!("{}/api/auth/logout", self.base_url);

        let result = self
            .http
            .post(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .send()
            .await;

        // 意図的なログアウトなのでオブザーバーには通知せず、
        // サーバーの応答に関わらずローカルのトークンを破棄する
        if let Err(e) = self.token_store.remove() {
            tracing::warn!("ログアウト時のトークン削除に失敗しました: {}", e);
        }

        match result {
            // 401 はサーバー側で既に失効済み — ログアウトの目的は達成されている
            Ok(response)
                if response.status().is_success()
                    || response.status() == reqwest::StatusCode::UNAUTHORIZED =>
            {
                Ok(())
            }
            Ok(response) => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Request(body))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn me(&self) -> Result<UserDto, ApiError> {
        let url = format!("{}/api/auth/me", self.base_url);

        let response = self
            .http
            .get(&url)
            .headers(auth_headers(self.token_store.as_ref()))
            .send()
            .await?;

        handle_response(response, self.token_store.as_ref(), self.observer_ref()).await
    }
}
