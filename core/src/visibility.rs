#![deny(missing_docs)]

//! # Visibility
//!
//! The audience a generated document is intended for.

use crate::error::AppError;
use crate::metamodel::ActionType;
use std::fmt;
use std::str::FromStr;

/// Audience level requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Restricted: only view models, values and their collections.
    Public,
    /// Every exposed domain object, user actions only.
    Private,
    /// As `Private`, plus prototype actions.
    PrivateWithPrototyping,
}

impl Visibility {
    /// All levels, narrowest first.
    pub const ALL: [Visibility; 3] = [
        Visibility::Public,
        Visibility::Private,
        Visibility::PrivateWithPrototyping,
    ];

    /// True for the restricted audience.
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    /// Action categories included at this level.
    pub fn action_types(self) -> &'static [ActionType] {
        match self {
            Visibility::Public | Visibility::Private => &[ActionType::User],
            Visibility::PrivateWithPrototyping => &[ActionType::User, ActionType::Prototype],
        }
    }

    /// Canonical name, as accepted by `from_str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::PrivateWithPrototyping => "private-with-prototyping",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            "private-with-prototyping" => Ok(Visibility::PrivateWithPrototyping),
            _ => Err(AppError::UnknownVisibility(s.to_string())),
        }
    }
}
