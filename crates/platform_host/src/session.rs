//! Session identity exposed to shell surfaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Signed-in user identity as the shell sees it.
pub struct SessionUser {
    /// Account email supplied by the auth collaborator.
    pub email: String,
}

impl SessionUser {
    /// Creates a session identity from an account email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Short label shown in shell chrome: the part of the email before `@`.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_local_part_of_email() {
        assert_eq!(SessionUser::new("ada@example.com").display_name(), "ada");
        assert_eq!(SessionUser::new("no-at-sign").display_name(), "no-at-sign");
    }
}
