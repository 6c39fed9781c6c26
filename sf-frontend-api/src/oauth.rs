use async_trait::async_trait;
use serde::Deserialize;

use crate::{Api, Auth, Query, Result};
use sf_boundary::ProviderToken;

/// Kakao OAuth login.
#[async_trait(?Send)]
pub trait AuthApi {
    /// The provider URL to redirect the browser to.
    async fn login_url(&self) -> Result<String>;
    /// Exchange the authorization code for a provider access token.
    async fn exchange_code(&self, code: &str) -> Result<ProviderToken>;
    /// Exchange the provider access token for the application JWT.
    async fn exchange_token(&self, access_token: &str) -> Result<String>;
}

/// The login URL is either sent as plain text or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum LoginUrl {
    Plain(String),
    Wrapped { url: String },
}

impl From<LoginUrl> for String {
    fn from(from: LoginUrl) -> Self {
        match from {
            LoginUrl::Plain(url) | LoginUrl::Wrapped { url } => url,
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for Api {
    async fn login_url(&self) -> Result<String> {
        let url: LoginUrl = self.get("/oauth/kakao", &Query::new(), Auth::Public).await?;
        Ok(url.into())
    }
    async fn exchange_code(&self, code: &str) -> Result<ProviderToken> {
        let fields = Query::new().param("code", code);
        self.post_form("/oauth/kakao/token", &fields, Auth::Public)
            .await
    }
    async fn exchange_token(&self, access_token: &str) -> Result<String> {
        self.post("/oauth/kakao/access", access_token, Auth::Public)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_shapes() {
        let url: LoginUrl = serde_json::from_str(r#""https://kauth.kakao.com/a""#).unwrap();
        assert_eq!(String::from(url), "https://kauth.kakao.com/a");
        let url: LoginUrl = serde_json::from_str(r#"{"url":"https://kauth.kakao.com/b"}"#).unwrap();
        assert_eq!(String::from(url), "https://kauth.kakao.com/b");
    }
}
