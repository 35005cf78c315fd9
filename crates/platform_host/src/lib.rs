//! Typed host-domain contracts for services the desktop shell consumes but
//! does not own.
//!
//! The shell's only external collaborator is authentication: the lock
//! screen and system bar consume "is a user present" plus the user's email
//! and nothing else. This crate is the API-first boundary for that
//! collaborator — a backend trait, a cloneable service wrapper, an
//! in-memory adapter for tests and native builds, and a browser-local
//! adapter for WASM builds.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod auth;
mod browser;
mod session;

pub use auth::{AuthBackend, AuthError, AuthFuture, AuthService, MemoryAuthBackend};
pub use browser::BrowserAuthBackend;
pub use session::SessionUser;

#[derive(Clone)]
/// Host service bundle injected into the shell at construction time.
pub struct HostServices {
    /// Authentication collaborator.
    pub auth: AuthService,
}

impl HostServices {
    /// Bundles host services around an auth backend.
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}
