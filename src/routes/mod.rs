//! Route table for the book-discovery client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is declarative data built once at startup. The navigation gate
//! keys its decisions on [`RouteName`]; the router shell and link builders use
//! the table for paths, parameters, and views.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod pattern;
pub mod table;

use std::fmt;
use std::str::FromStr;

pub use pattern::{Params, PathPattern, PatternError};
pub use table::{Route, RouteDef, RouteMatch, RouteTable, RouteTableError, ViewLoading};

/// Names of every declared route.
///
/// String forms keep the casing of the deployed route table, including
/// `BookDetail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    Home,
    Login,
    Signup,
    BookDetail,
    Search,
    Profile,
}

impl RouteName {
    pub const ALL: [RouteName; 6] = [
        RouteName::Home,
        RouteName::Login,
        RouteName::Signup,
        RouteName::BookDetail,
        RouteName::Search,
        RouteName::Profile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::Login => "login",
            RouteName::Signup => "signup",
            RouteName::BookDetail => "BookDetail",
            RouteName::Search => "search",
            RouteName::Profile => "profile",
        }
    }

    /// Whether this route belongs to the login/signup flow.
    pub fn is_auth_flow(self) -> bool {
        matches!(self, RouteName::Login | RouteName::Signup)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a declared route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route name `{0}`")]
pub struct UnknownRouteName(pub String);

impl FromStr for RouteName {
    type Err = UnknownRouteName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRouteName(s.to_owned()))
    }
}
