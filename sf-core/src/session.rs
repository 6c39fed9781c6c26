//! The logged in user.
//!
//! All reads and writes of the persisted session go through [`Session`].

use crate::jwt;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const NICKNAME_KEY: &str = "nickname";

/// Persistent string key/value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn delete(&self, key: &str);
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token    : Option<String>,
    /// Kept as the string it is stored as.
    pub user_id  : Option<String>,
    pub nickname : Option<String>,
}

impl Session {
    pub fn load<S>(store: &S) -> Self
    where
        S: SessionStore,
    {
        let Some(token) = store.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return Self::default();
        };
        let user_id = store
            .get(USER_ID_KEY)
            .or_else(|| jwt::user_id_from_token(&token).map(|id| id.to_string()));
        let nickname = store.get(NICKNAME_KEY);
        Self {
            token: Some(token),
            user_id,
            nickname,
        }
    }

    /// Persists a freshly issued token.
    ///
    /// The user ID and, if not given, the nickname are taken from the token claims.
    pub fn login<S>(store: &S, token: String, nickname: Option<String>) -> anyhow::Result<Self>
    where
        S: SessionStore,
    {
        let claims = jwt::decode_claims(&token);
        let user_id = jwt::user_id_from_token(&token).map(|id| id.to_string());
        let nickname = nickname.or_else(|| {
            claims
                .as_ref()
                .and_then(|c| c.get("nickname"))
                .and_then(|n| n.as_str())
                .map(ToOwned::to_owned)
        });
        match &user_id {
            Some(id) => store.set(USER_ID_KEY, id)?,
            None => {
                log::warn!("The token does not contain a user ID");
                store.delete(USER_ID_KEY);
            }
        }
        match &nickname {
            Some(n) => store.set(NICKNAME_KEY, n)?,
            None => store.delete(NICKNAME_KEY),
        }
        // A stored token marks the session as complete.
        store.set(TOKEN_KEY, &token)?;
        Ok(Self {
            token: Some(token),
            user_id,
            nickname,
        })
    }

    pub fn logout<S>(store: &S) -> Self
    where
        S: SessionStore,
    {
        store.delete(TOKEN_KEY);
        store.delete(USER_ID_KEY);
        store.delete(NICKNAME_KEY);
        Self::default()
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user_id.as_deref().and_then(|id| id.parse().ok())
    }

    /// Whether the resource of `owner_id` belongs to the current user.
    ///
    /// This only decides which controls are shown, the backend has the last word.
    #[must_use]
    pub fn owns(&self, owner_id: i64) -> bool {
        self.user_id
            .as_deref()
            .is_some_and(|id| id == owner_id.to_string())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap};

    #[derive(Default)]
    pub struct MemoryStore(pub RefCell<HashMap<String, String>>);

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().insert(key.into(), value.into());
            Ok(())
        }
        fn delete(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    // {"userId":7,"nickname":"홍길동"}
    pub const TOKEN: &str =
        "eyJhbGciOiJIUzI1NiJ9.eyJ1c2VySWQiOjcsIm5pY2tuYW1lIjoi7ZmN6ri464-ZIn0=.c2ln";

    #[test]
    fn login_persists_token_and_claims() {
        let store = MemoryStore::default();
        let session = Session::login(&store, TOKEN.into(), None).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.user_id(), Some(7));
        assert_eq!(session.nickname.as_deref(), Some("홍길동"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(TOKEN));
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("7"));
        assert_eq!(Session::load(&store), session);
    }

    /// Refuses to store the given key.
    struct BrokenStore {
        memory: MemoryStore,
        broken_key: &'static str,
    }

    impl SessionStore for BrokenStore {
        fn get(&self, key: &str) -> Option<String> {
            self.memory.get(key)
        }
        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            if key == self.broken_key {
                anyhow::bail!("Quota exceeded");
            }
            self.memory.set(key, value)
        }
        fn delete(&self, key: &str) {
            self.memory.delete(key);
        }
    }

    #[test]
    fn failed_login_leaves_no_token_behind() {
        for broken_key in [USER_ID_KEY, NICKNAME_KEY] {
            let store = BrokenStore {
                memory: MemoryStore::default(),
                broken_key,
            };
            assert!(Session::login(&store, TOKEN.into(), None).is_err());
            assert_eq!(store.get(TOKEN_KEY), None);
            assert_eq!(Session::load(&store), Session::default());
        }
    }

    #[test]
    fn logout_clears_every_key() {
        let store = MemoryStore::default();
        Session::login(&store, TOKEN.into(), Some("nick".into())).unwrap();
        let session = Session::logout(&store);
        assert!(!session.is_logged_in());
        assert!(store.0.borrow().is_empty());
        assert_eq!(Session::load(&store), Session::default());
    }

    #[test]
    fn load_derives_missing_user_id() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, TOKEN).unwrap();
        assert_eq!(Session::load(&store).user_id(), Some(7));
    }

    #[test]
    fn ownership_compares_ids() {
        let session = Session {
            token: Some(TOKEN.into()),
            user_id: Some("7".into()),
            nickname: None,
        };
        assert!(session.owns(7));
        assert!(!session.owns(8));
        assert!(!Session::default().owns(7));
    }
}
