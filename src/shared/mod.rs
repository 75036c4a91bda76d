//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize as the
//! plain strings the backend sends, so they can be used directly in wire types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The demo backend auto-creates this user on first use.
pub const DEFAULT_USER_ID: &str = "user-1";

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok($name(s))
            }
        }
    };
}

string_id!(
    /// Identifier of a vocabulary word.
    WordId
);
string_id!(
    /// Identifier of a user (wordbook owner).
    UserId
);
string_id!(
    /// Identifier of a grammatical concept.
    ConceptId
);
string_id!(
    /// Identifier of a lesson.
    LessonId
);

impl UserId {
    pub fn default_user() -> Self {
        Self::new(DEFAULT_USER_ID)
    }
}

/// Reject blank required input before a request is made.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<String, crate::error::SdkError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::error::SdkError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
