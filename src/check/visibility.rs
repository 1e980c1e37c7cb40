//! Public/private classification of declaration names.

use serde::Serialize;
use std::fmt;

/// Which limit applies to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Naming convention deciding whether a name is exported.
pub trait VisibilityRule: Send + Sync {
    fn is_public(&self, name: &str) -> bool;

    fn classify(&self, name: &str) -> Visibility {
        if self.is_public(name) {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

/// Go's exported-identifier rule: the first character is an upper-case letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoVisibility;

impl VisibilityRule for GoVisibility {
    fn is_public(&self, name: &str) -> bool {
        is_public(name)
    }
}

/// Whether `name` starts with an upper-case letter.
///
/// Empty names, underscores, digits and lower-case letters are private.
pub fn is_public(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
