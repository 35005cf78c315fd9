//! Browser-local auth adapter backed by `localStorage`.
//!
//! Stands in for a hosted identity provider: accounts and the active
//! session live entirely in the browser profile, so the shell itself still
//! persists nothing. This is a demo credential store, not a secret store.

use crate::{
    auth::{validate_credentials, AuthBackend, AuthError, AuthFuture},
    session::SessionUser,
};

#[cfg(target_arch = "wasm32")]
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
const ACCOUNTS_KEY: &str = "nimbus.auth.accounts.v1";
#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "nimbus.auth.session.v1";

#[derive(Debug, Clone, Copy, Default)]
/// `localStorage`-delegated auth adapter for WASM builds.
///
/// On non-WASM targets every operation behaves as a backend with no
/// accounts and no session, keeping native builds deterministic.
pub struct BrowserAuthBackend;

impl BrowserAuthBackend {
    /// Creates the browser adapter.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, AuthError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| AuthError::Backend("localStorage unavailable".to_string()))
}

#[cfg(target_arch = "wasm32")]
fn load_accounts(storage: &web_sys::Storage) -> HashMap<String, String> {
    storage
        .get_item(ACCOUNTS_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn store_accounts(
    storage: &web_sys::Storage,
    accounts: &HashMap<String, String>,
) -> Result<(), AuthError> {
    let raw = serde_json::to_string(accounts)
        .map_err(|err| AuthError::Backend(err.to_string()))?;
    storage
        .set_item(ACCOUNTS_KEY, &raw)
        .map_err(|_| AuthError::Backend("account store write failed".to_string()))
}

#[cfg(target_arch = "wasm32")]
fn store_session(storage: &web_sys::Storage, user: &SessionUser) -> Result<(), AuthError> {
    let raw =
        serde_json::to_string(user).map_err(|err| AuthError::Backend(err.to_string()))?;
    storage
        .set_item(SESSION_KEY, &raw)
        .map_err(|_| AuthError::Backend("session write failed".to_string()))
}

impl AuthBackend for BrowserAuthBackend {
    fn current_user(&self) -> Option<SessionUser> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage().ok()?;
            let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
            serde_json::from_str(&raw).ok()
        }

        #[cfg(not(target_arch = "wasm32"))]
        None
    }

    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<SessionUser, AuthError>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let storage = local_storage()?;
                let matches = load_accounts(&storage)
                    .get(email)
                    .is_some_and(|stored| stored == password);
                if !matches {
                    return Err(AuthError::InvalidCredentials);
                }
                let user = SessionUser::new(email);
                store_session(&storage, &user)?;
                return Ok(user);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (email, password);
                Err(AuthError::InvalidCredentials)
            }
        })
    }

    fn sign_up<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<SessionUser, AuthError>> {
        Box::pin(async move {
            validate_credentials(email, password)?;

            #[cfg(target_arch = "wasm32")]
            {
                let storage = local_storage()?;
                let mut accounts = load_accounts(&storage);
                if accounts.contains_key(email) {
                    return Err(AuthError::EmailTaken);
                }
                accounts.insert(email.to_string(), password.to_string());
                store_accounts(&storage, &accounts)?;
                let user = SessionUser::new(email);
                store_session(&storage, &user)?;
                return Ok(user);
            }

            #[cfg(not(target_arch = "wasm32"))]
            Err(AuthError::Backend(
                "browser auth requires a WASM target".to_string(),
            ))
        })
    }

    fn sign_out(&self) -> AuthFuture<'_, Result<(), AuthError>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let storage = local_storage()?;
                storage
                    .remove_item(SESSION_KEY)
                    .map_err(|_| AuthError::Backend("session clear failed".to_string()))?;
            }

            Ok(())
        })
    }
}
