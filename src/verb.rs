//! Action verbs as a typed enum.
//!
//! The envelope convention names four canonical actions and displays each as
//! the present participle a consumer reads in the final payload:
//!
//! | Key | Displayed as |
//! |---|---|
//! | `get` | `getting` |
//! | `create` | `creating` |
//! | `update` | `changing` |
//! | `delete` | `deleting` |
//!
//! The table is closed, process-wide, and immutable. Labels outside the four
//! keys can still travel through an envelope as raw strings — see
//! [`Action`](crate::Action).

use std::fmt;
use std::str::FromStr;

/// A canonical action verb.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Verb {
    Get,
    Create,
    Update,
    Delete,
}

impl Verb {
    /// Every canonical verb, in declaration order.
    pub const ALL: [Verb; 4] = [Self::Get, Self::Create, Self::Update, Self::Delete];

    /// Returns the display form that ends up on the wire (e.g. `"getting"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get    => "getting",
            Self::Create => "creating",
            Self::Update => "changing",
            Self::Delete => "deleting",
        }
    }
}

/// Parses a lowercase action key (e.g. `"get"`). Case-sensitive.
impl FromStr for Verb {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get"    => Ok(Self::Get),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            _        => Err(()),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
