//! Identity supplied by the authentication collaborator.
//!
//! Read-only from the welcome gate's point of view.

use serde::{Deserialize, Serialize};

/// Glyph shown when the user has no avatar
pub const DEFAULT_AVATAR: &str = "🕉️";

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Display name used in the greeting
    pub name: String,

    /// Optional avatar glyph (usually a single emoji)
    pub avatar: Option<String>,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Avatar glyph, or [`DEFAULT_AVATAR`] when unset or blank
    pub fn avatar_glyph(&self) -> &str {
        match self.avatar.as_deref() {
            Some(a) if !a.trim().is_empty() => a,
            _ => DEFAULT_AVATAR,
        }
    }

    /// "Namaste, <name> Ji"
    pub fn greeting(&self) -> String {
        format!("Namaste, {} Ji", self.name)
    }
}

/// Authentication snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub current_user: Option<CurrentUser>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            current_user: Some(user),
            is_authenticated: true,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// The user, only when authenticated *and* present
    pub fn active_user(&self) -> Option<&CurrentUser> {
        if self.is_authenticated {
            self.current_user.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_fallback() {
        assert_eq!(CurrentUser::new("Ravi").avatar_glyph(), DEFAULT_AVATAR);
        assert_eq!(CurrentUser::new("Ravi").with_avatar("  ").avatar_glyph(), DEFAULT_AVATAR);
        assert_eq!(CurrentUser::new("Ravi").with_avatar("🪷").avatar_glyph(), "🪷");
    }

    #[test]
    fn test_greeting() {
        assert_eq!(CurrentUser::new("Meera").greeting(), "Namaste, Meera Ji");
    }

    #[test]
    fn test_active_user_requires_both() {
        assert!(AuthState::signed_in(CurrentUser::new("a")).active_user().is_some());
        assert!(AuthState::signed_out().active_user().is_none());

        let stale = AuthState {
            current_user: Some(CurrentUser::new("a")),
            is_authenticated: false,
        };
        assert!(stale.active_user().is_none());

        let no_user = AuthState {
            current_user: None,
            is_authenticated: true,
        };
        assert!(no_user.active_user().is_none());
    }
}
