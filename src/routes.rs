//! Application route table.
//!
//! Only `/upload` and `/dashboard` are gated; the remaining screens render
//! for anonymous visitors.

use std::fmt;

pub const LOGIN_ROUTE: &str = "/login";
/// Where a successful sign-in or sign-up lands.
pub const POST_LOGIN_ROUTE: &str = "/upload";
pub const POST_SIGN_OUT_ROUTE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Upload,
    Dashboard,
    Contracts,
    Chat,
    Risk,
    Clauses,
}

impl Route {
    pub const ALL: [Self; 8] = [
        Self::Landing,
        Self::Login,
        Self::Upload,
        Self::Dashboard,
        Self::Contracts,
        Self::Chat,
        Self::Risk,
        Self::Clauses,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => LOGIN_ROUTE,
            Self::Upload => "/upload",
            Self::Dashboard => "/dashboard",
            Self::Contracts => "/contracts",
            Self::Chat => "/chat",
            Self::Risk => "/risk",
            Self::Clauses => "/clauses",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Quill",
            Self::Login => "Sign in",
            Self::Upload => "Upload contract",
            Self::Dashboard => "Dashboard",
            Self::Contracts => "Contracts",
            Self::Chat => "Chat",
            Self::Risk => "Risk analysis",
            Self::Clauses => "Clause generator",
        }
    }

    /// Whether the screen requires a signed-in session.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Upload | Self::Dashboard)
    }

    /// Resolve a request path. A single trailing slash is tolerated.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
