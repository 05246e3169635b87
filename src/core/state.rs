//! Identifiers for states and events.
//!
//! Both identifiers are opaque strings. They borrow as `str`, so lookups in
//! the configuration tables work with plain string slices.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id! {
    /// Name of a state in a machine configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::StateId;
    ///
    /// let idle = StateId::from("idle");
    /// assert_eq!(idle, "idle");
    /// assert_eq!(idle.to_string(), "idle");
    /// ```
    StateId
}

string_id! {
    /// Name of an event that may fire a transition.
    EventId
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn state_id_compares_with_str() {
        let state = StateId::from("running");
        assert_eq!(state, "running");
        assert_eq!(state.as_str(), "running");
        assert_ne!(state, "paused");
    }

    #[test]
    fn ids_borrow_as_str_for_lookups() {
        let mut table: HashMap<EventId, StateId> = HashMap::new();
        table.insert("start".into(), "running".into());

        assert_eq!(table.get("start"), Some(&StateId::from("running")));
        assert!(table.get("stop").is_none());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let event = EventId::new("pause");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, "\"pause\"");

        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn display_matches_inner_string() {
        assert_eq!(format!("{}", StateId::new(String::from("idle"))), "idle");
    }
}
