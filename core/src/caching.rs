#![deny(missing_docs)]

//! # Response Caching
//!
//! Every generated response declares exactly one of these classes as its
//! `Cache-Control` header.

/// Fixed response caching classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Caching {
    /// Immutable supporting resources (home page, version).
    NonExpiring,
    /// Information about the current user.
    UserInfo,
    /// Object and service representations, which may change at any time.
    Transactional,
    /// Long-lived resources of the supporting-resources generator.
    LongTerm,
}

impl Caching {
    /// Name of the header each response declares.
    pub const HEADER: &'static str = "Cache-Control";

    /// The `Cache-Control` value.
    pub fn header_value(self) -> &'static str {
        match self {
            Caching::NonExpiring => "max-age=86400",
            Caching::UserInfo => "max-age=3600",
            Caching::Transactional => "no-cache, no-store, must-revalidate",
            Caching::LongTerm => "max-age=31536000",
        }
    }

    /// Human readable summary used as the header description.
    pub fn description(self) -> &'static str {
        match self {
            Caching::NonExpiring => "non-expiring (one day)",
            Caching::UserInfo => "user info (one hour)",
            Caching::Transactional => "transactional (never cached)",
            Caching::LongTerm => "long term (one year)",
        }
    }
}
