//! Shared contract types between the desktop shell runtime and hosted apps.
//!
//! The shell addresses applications by canonical string identifiers
//! (`AppId`) and hosts their views through opaque renderable handles
//! (`ViewHandle`). The runtime never inspects a handle; it only asks it to
//! render into a host region.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc};

use leptos::View;
use thiserror::Error;

/// Error returned when an application identifier fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppIdError {
    /// The identifier did not conform to the lowercase-kebab token policy.
    #[error("invalid application id `{0}`; expected a lowercase kebab-case token")]
    InvalidToken(String),
}

/// Stable string identifier for a launchable application.
///
/// Also serves as the registry key and the keyed-list reconciliation key, so
/// at most one window per id can exist at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppId(String);

impl AppId {
    /// Returns an app identifier when `raw` conforms to the token policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, AppIdError> {
        let raw = raw.into();
        if is_valid_app_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(AppIdError::InvalidToken(raw))
        }
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_app_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 64 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() {
        return false;
    }
    if raw.ends_with('-') || raw.contains("--") {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// Capability-typed handle to something that can be displayed in a host
/// region.
///
/// Callers supply a fresh handle on every open request; the registry stores
/// it untouched and renders it once per mount. Equality is handle identity,
/// which keeps registry state comparable without inspecting view contents.
#[derive(Clone)]
pub struct ViewHandle(Rc<dyn Fn() -> View>);

impl ViewHandle {
    /// Wraps a render closure into an opaque handle.
    pub fn new(render: impl Fn() -> View + 'static) -> Self {
        Self(Rc::new(render))
    }

    /// Renders the handle into a view.
    pub fn render(&self) -> View {
        (self.0)()
    }
}

impl PartialEq for ViewHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewHandle")
    }
}

#[cfg(test)]
mod tests {
    use leptos::IntoView;

    use super::*;

    #[test]
    fn app_id_accepts_kebab_case_tokens() {
        assert!(AppId::new("calculator").is_ok());
        assert!(AppId::new("photo-viewer2").is_ok());
        assert!(AppId::new("").is_err());
        assert!(AppId::new("Calculator").is_err());
        assert!(AppId::new("notes-").is_err());
        assert!(AppId::new("a--b").is_err());
        assert!(AppId::new("with space").is_err());
    }

    #[test]
    fn view_handle_equality_is_handle_identity() {
        let a = ViewHandle::new(|| ().into_view());
        let b = a.clone();
        let c = ViewHandle::new(|| ().into_view());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
