//! Identifier types.
//!
//! Board ids arrive from the host as either strings or numbers. They are kept
//! as-is and compared by value, then wrapped in role-specific newtypes so an
//! item id can never be handed to an API expecting a container id.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Opaque string-or-number identifier supplied by the host.
///
/// Equality is by value and by kind: `Text("1")` and `Number(1)` differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Identifier {
    /// The id's string form, used by the substring role protocol.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Whether the id's string form contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.as_text().contains(needle)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Identifier {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Identifier {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Identifier);

        impl $name {
            /// Borrow the underlying identifier
            pub fn as_identifier(&self) -> &Identifier {
                &self.0
            }

            /// Unwrap into the underlying identifier
            pub fn into_identifier(self) -> Identifier {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Identifier> for $name {
            fn from(value: Identifier) -> Self {
                Self(value)
            }
        }

        impl From<&Identifier> for $name {
            fn from(value: &Identifier) -> Self {
                Self(value.clone())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.into())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value.into())
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value.into())
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value.into())
            }
        }

        impl PartialEq<Identifier> for $name {
            fn eq(&self, other: &Identifier) -> bool {
                &self.0 == other
            }
        }
    };
}

define_id!(
    /// Id of a card
    ItemId
);

define_id!(
    /// Id of a column
    ContainerId
);

/// ULID assigned to every emitted move record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveRecordId(String);

impl MoveRecordId {
    /// Generate a fresh ULID-backed id
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    /// The ULID text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MoveRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MoveRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
