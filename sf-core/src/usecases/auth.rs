use super::prelude::*;
use crate::session::SessionStore;

/// Progress of the Kakao login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Unauthenticated,
    /// Leaving the app for the provider's login page.
    Redirecting,
    ExchangingCode,
    ExchangingToken,
    Authenticated,
    Failed(String),
}

impl LoginState {
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Redirecting | Self::ExchangingCode | Self::ExchangingToken
        )
    }
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("인가 코드가 없습니다.")]
    MissingCode,
    #[error("로그인 페이지 주소를 가져오지 못했습니다: {0}")]
    LoginUrl(#[source] api::Error),
    #[error("카카오 토큰 발급에 실패했습니다: {0}")]
    ProviderToken(#[source] api::Error),
    #[error("로그인 토큰 발급에 실패했습니다: {0}")]
    AccessToken(#[source] api::Error),
    #[error("발급된 토큰이 비어 있습니다.")]
    EmptyToken,
    #[error("로그인 정보를 저장하지 못했습니다: {0}")]
    Store(anyhow::Error),
}

/// The provider URL the browser has to visit.
pub async fn login_redirect_url<A>(api: &A) -> Result<String, LoginError>
where
    A: AuthApi,
{
    let url = api.login_url().await.map_err(LoginError::LoginUrl)?;
    log::debug!("Redirecting to {url}");
    Ok(url)
}

/// Exchanges the authorization `code` for a session.
///
/// Each step reports its state through `on_state`.
/// The chain stops at the first failure.
pub async fn complete_login<A, S, F>(
    api: &A,
    store: &S,
    code: &str,
    mut on_state: F,
) -> Result<Session, LoginError>
where
    A: AuthApi,
    S: SessionStore,
    F: FnMut(LoginState),
{
    let result = exchange(api, store, code, &mut on_state).await;
    match &result {
        Ok(session) => {
            log::info!("Logged in as user {:?}", session.user_id);
            on_state(LoginState::Authenticated);
        }
        Err(err) => {
            log::error!("Login failed: {err}");
            on_state(LoginState::Failed(err.to_string()));
        }
    }
    result
}

async fn exchange<A, S, F>(
    api: &A,
    store: &S,
    code: &str,
    on_state: &mut F,
) -> Result<Session, LoginError>
where
    A: AuthApi,
    S: SessionStore,
    F: FnMut(LoginState),
{
    let code = code.trim();
    if code.is_empty() {
        return Err(LoginError::MissingCode);
    }
    on_state(LoginState::ExchangingCode);
    let provider_token = api
        .exchange_code(code)
        .await
        .map_err(LoginError::ProviderToken)?;
    on_state(LoginState::ExchangingToken);
    let token = api
        .exchange_token(&provider_token.access_token)
        .await
        .map_err(LoginError::AccessToken)?;
    let token = token.trim().trim_matches('"').to_owned();
    if token.is_empty() {
        return Err(LoginError::EmptyToken);
    }
    Session::login(store, token, None).map_err(LoginError::Store)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::session::{
        tests::{MemoryStore, TOKEN},
        TOKEN_KEY,
    };

    #[tokio::test]
    async fn exchange_code_then_token() {
        let api = MockApi::default();
        let store = MemoryStore::default();
        let mut states = vec![];
        let session = complete_login(&api, &store, "abc", |s| states.push(s))
            .await
            .unwrap();
        assert_eq!(session.user_id(), Some(7));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(TOKEN));
        assert_eq!(
            states,
            vec![
                LoginState::ExchangingCode,
                LoginState::ExchangingToken,
                LoginState::Authenticated
            ]
        );
        assert_eq!(
            api.calls(),
            vec![
                "POST /oauth/kakao/token code=abc",
                "POST /oauth/kakao/access kakao-access"
            ]
        );
    }

    #[tokio::test]
    async fn failure_stops_the_chain() {
        let api = MockApi::default();
        let store = MemoryStore::default();
        api.fail_with(401, None);
        let mut states = vec![];
        let err = complete_login(&api, &store, "abc", |s| states.push(s))
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::ProviderToken(_)));
        assert_eq!(api.calls().len(), 1);
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(matches!(states.last(), Some(LoginState::Failed(_))));
    }

    #[tokio::test]
    async fn missing_code() {
        let api = MockApi::default();
        let store = MemoryStore::default();
        let err = complete_login(&api, &store, " ", |_| {}).await.unwrap_err();
        assert!(matches!(err, LoginError::MissingCode));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn fetch_redirect_url() {
        let api = MockApi::default();
        let url = login_redirect_url(&api).await.unwrap();
        assert!(url.starts_with("https://kauth.kakao.com/"));
    }

    #[test]
    fn busy_states() {
        assert!(LoginState::ExchangingCode.is_busy());
        assert!(!LoginState::Failed("x".into()).is_busy());
        assert!(!LoginState::default().is_busy());
    }
}
