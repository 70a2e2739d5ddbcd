//! Navigation targets of the front end.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ParseError;

/// Delay between showing the logout page and returning to the login page.
pub const LOGOUT_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// A client-side route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Login form, served at the root.
    Login,
    Dashboard,
    Logout,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Login, Self::Dashboard, Self::Logout];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::Logout => "/sair",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ParseError;

    /// Parse a path, ignoring a single trailing slash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = match s.strip_suffix('/') {
            Some("") | None => s,
            Some(rest) => rest,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .ok_or_else(|| ParseError::UnknownRoute(s.to_string()))
    }
}
