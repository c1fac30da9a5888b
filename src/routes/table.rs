//! Validated, ordered route table.
//!
//! ERROR HANDLING
//! ==============
//! Construction is the only fallible step. Duplicate names and malformed
//! patterns surface as [`RouteTableError`]; lookups afterwards are plain
//! `Option`s.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use leptos::prelude::*;

use super::RouteName;
use super::pattern::{Params, PathPattern, PatternError};
use crate::pages::{
    book_detail::BookDetailPage, home::HomePage, login::LoginPage, profile::ProfilePage, search::SearchPage,
    signup::SignupPage,
};

/// How a route's view module is expected to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewLoading {
    /// Shipped with the initial bundle.
    Eager,
    /// Resolved on first navigation.
    Lazy,
}

/// Static declaration of one route, validated by [`RouteTable::new`].
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub name: RouteName,
    pub path: &'static str,
    pub loading: ViewLoading,
    pub view: fn() -> AnyView,
}

/// A validated route entry.
#[derive(Clone, Debug)]
pub struct Route {
    name: RouteName,
    pattern: PathPattern,
    loading: ViewLoading,
    view: fn() -> AnyView,
}

impl Route {
    pub fn name(&self) -> RouteName {
        self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn loading(&self) -> ViewLoading {
        self.loading
    }

    /// Render this route's view.
    pub fn render(&self) -> AnyView {
        (self.view)()
    }
}

/// A route matched from a concrete URL path.
#[derive(Clone, Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: Params,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route name `{0}` is declared more than once")]
    DuplicateName(RouteName),
    #[error("route `{name}` has an invalid path: {source}")]
    InvalidPattern {
        name: RouteName,
        #[source]
        source: PatternError,
    },
    #[error("route `{0}` is not in the table")]
    UnknownRoute(RouteName),
    #[error("cannot build a link to `{name}`: {source}")]
    Link {
        name: RouteName,
        #[source]
        source: PatternError,
    },
}

/// Ordered, immutable collection of routes with unique names.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validate `defs` and build the table in declaration order.
    pub fn new(defs: &[RouteDef]) -> Result<Self, RouteTableError> {
        let mut routes: Vec<Route> = Vec::with_capacity(defs.len());
        for def in defs {
            if routes.iter().any(|r| r.name == def.name) {
                return Err(RouteTableError::DuplicateName(def.name));
            }
            let pattern = PathPattern::parse(def.path)
                .map_err(|source| RouteTableError::InvalidPattern { name: def.name, source })?;
            routes.push(Route { name: def.name, pattern, loading: def.loading, view: def.view });
        }
        Ok(Self { routes })
    }

    /// The application's route table.
    pub fn standard() -> Result<Self, RouteTableError> {
        Self::new(&standard_defs())
    }

    pub fn resolve(&self, name: RouteName) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route, in declaration order, whose pattern matches `path`.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes
            .iter()
            .find_map(|route| route.pattern.matches(path).map(|params| RouteMatch { route, params }))
    }

    /// Build the URL for `name`, substituting `params` into its pattern.
    pub fn href(&self, name: RouteName, params: &Params) -> Result<String, RouteTableError> {
        let route = self.resolve(name).ok_or(RouteTableError::UnknownRoute(name))?;
        route
            .pattern
            .render(params)
            .map_err(|source| RouteTableError::Link { name, source })
    }
}

fn standard_defs() -> [RouteDef; 6] {
    [
        RouteDef {
            name: RouteName::Home,
            path: "/",
            loading: ViewLoading::Eager,
            view: || view! { <HomePage/> }.into_any(),
        },
        RouteDef {
            name: RouteName::Login,
            path: "/login",
            loading: ViewLoading::Eager,
            view: || view! { <LoginPage/> }.into_any(),
        },
        RouteDef {
            name: RouteName::Signup,
            path: "/signup",
            loading: ViewLoading::Lazy,
            view: || view! { <SignupPage/> }.into_any(),
        },
        RouteDef {
            name: RouteName::BookDetail,
            path: "/book/:isbn",
            loading: ViewLoading::Lazy,
            view: || view! { <BookDetailPage/> }.into_any(),
        },
        RouteDef {
            name: RouteName::Search,
            path: "/search",
            loading: ViewLoading::Lazy,
            view: || view! { <SearchPage/> }.into_any(),
        },
        RouteDef {
            name: RouteName::Profile,
            path: "/profile",
            loading: ViewLoading::Lazy,
            view: || view! { <ProfilePage/> }.into_any(),
        },
    ]
}
