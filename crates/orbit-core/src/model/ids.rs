use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().as_simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// First 8 characters, for compact display.
            pub fn short(&self) -> &str {
                self.0
                    .char_indices()
                    .nth(8)
                    .map_or(&self.0[..], |(end, _)| &self.0[..end])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_id!(
    /// Identifies a contact. UUID v4 hex (no dashes), assigned by the store.
    ContactId
);
define_id!(
    /// Identifies a logged interaction.
    InteractionId
);
define_id!(ReminderId);
