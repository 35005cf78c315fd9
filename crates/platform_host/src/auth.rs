//! Authentication collaborator contracts and the in-memory adapter.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

use crate::session::SessionUser;

/// Minimum accepted password length, matching the hosted backend policy.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Object-safe boxed future used by [`AuthBackend`] async methods.
pub type AuthFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by the authentication collaborator.
pub enum AuthError {
    /// Email/password pair did not match a known account.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Sign-up attempted with an email that already has an account.
    #[error("an account with this email already exists")]
    EmailTaken,
    /// Email failed basic shape validation.
    #[error("enter a valid email address")]
    InvalidEmail,
    /// Password shorter than [`MIN_PASSWORD_LEN`].
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    /// Backend-reported failure outside the typed cases.
    #[error("authentication backend error: {0}")]
    Backend(String),
}

/// Authentication backend boundary.
///
/// The shell never implements authentication; it consumes this contract.
/// `current_user` is a synchronous session read so route guards can run
/// without suspending.
pub trait AuthBackend {
    /// Returns the signed-in user when a session is present.
    fn current_user(&self) -> Option<SessionUser>;

    /// Signs in with an email/password pair, establishing a session.
    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<SessionUser, AuthError>>;

    /// Creates an account and establishes a session for it.
    fn sign_up<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<SessionUser, AuthError>>;

    /// Ends the current session.
    fn sign_out(&self) -> AuthFuture<'_, Result<(), AuthError>>;
}

/// Basic email shape check shared by adapters; real validation belongs to
/// the backing identity provider.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    let (local, domain) = email.split_once('@').ok_or(AuthError::InvalidEmail)?;
    if local.is_empty() || domain.is_empty() {
        return Err(AuthError::InvalidEmail);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }
    Ok(())
}

#[derive(Clone)]
/// Cloneable handle to the configured auth backend.
pub struct AuthService {
    backend: Rc<dyn AuthBackend>,
}

impl AuthService {
    /// Wraps an auth backend.
    pub fn new(backend: impl AuthBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Returns the signed-in user when a session is present.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.backend.current_user()
    }

    /// Signs in with an email/password pair.
    pub fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<SessionUser, AuthError>> {
        self.backend.sign_in(email, password)
    }

    /// Creates an account and signs it in.
    pub fn sign_up<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<SessionUser, AuthError>> {
        self.backend.sign_up(email, password)
    }

    /// Ends the current session.
    pub fn sign_out(&self) -> AuthFuture<'_, Result<(), AuthError>> {
        self.backend.sign_out()
    }
}

#[derive(Debug, Clone, Default)]
/// In-process auth adapter for unit tests and native builds.
pub struct MemoryAuthBackend {
    accounts: Rc<RefCell<HashMap<String, String>>>,
    session: Rc<RefCell<Option<String>>>,
}

impl MemoryAuthBackend {
    /// Creates an empty adapter with no accounts and no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter pre-seeded with one signed-out account.
    pub fn with_account(email: impl Into<String>, password: impl Into<String>) -> Self {
        let backend = Self::new();
        backend
            .accounts
            .borrow_mut()
            .insert(email.into(), password.into());
        backend
    }
}

impl AuthBackend for MemoryAuthBackend {
    fn current_user(&self) -> Option<SessionUser> {
        self.session.borrow().as_ref().map(SessionUser::new)
    }

    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<SessionUser, AuthError>> {
        Box::pin(async move {
            let matches = self
                .accounts
                .borrow()
                .get(email)
                .is_some_and(|stored| stored == password);
            if !matches {
                return Err(AuthError::InvalidCredentials);
            }
            *self.session.borrow_mut() = Some(email.to_string());
            Ok(SessionUser::new(email))
        })
    }

    fn sign_up<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<SessionUser, AuthError>> {
        Box::pin(async move {
            validate_credentials(email, password)?;
            let mut accounts = self.accounts.borrow_mut();
            if accounts.contains_key(email) {
                return Err(AuthError::EmailTaken);
            }
            accounts.insert(email.to_string(), password.to_string());
            *self.session.borrow_mut() = Some(email.to_string());
            Ok(SessionUser::new(email))
        })
    }

    fn sign_out(&self) -> AuthFuture<'_, Result<(), AuthError>> {
        Box::pin(async move {
            *self.session.borrow_mut() = None;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn sign_up_establishes_session_and_rejects_duplicates() {
        let auth = AuthService::new(MemoryAuthBackend::new());
        assert!(auth.current_user().is_none());

        let user = block_on(auth.sign_up("ada@example.com", "hunter2")).expect("sign up");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(auth.current_user(), Some(user));

        assert_eq!(
            block_on(auth.sign_up("ada@example.com", "hunter2")),
            Err(AuthError::EmailTaken)
        );
    }

    #[test]
    fn sign_up_validates_email_and_password() {
        let auth = AuthService::new(MemoryAuthBackend::new());
        assert_eq!(
            block_on(auth.sign_up("not-an-email", "hunter2")),
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            block_on(auth.sign_up("@example.com", "hunter2")),
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            block_on(auth.sign_up("ada@example.com", "abc")),
            Err(AuthError::WeakPassword)
        );
    }

    #[test]
    fn sign_in_round_trip_and_failure() {
        let auth = AuthService::new(MemoryAuthBackend::with_account(
            "ada@example.com",
            "hunter2",
        ));

        assert_eq!(
            block_on(auth.sign_in("ada@example.com", "wrong")),
            Err(AuthError::InvalidCredentials)
        );
        assert!(auth.current_user().is_none());

        block_on(auth.sign_in("ada@example.com", "hunter2")).expect("sign in");
        assert!(auth.current_user().is_some());

        block_on(auth.sign_out()).expect("sign out");
        assert!(auth.current_user().is_none());
    }
}
