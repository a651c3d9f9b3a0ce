//! Top-level page state machine.
//!
//! Defines [`Page`], a Bevy [`States`] enum selecting which screen is shown.
//! It lives in the core crate so rendering and UI can both gate systems on
//! it with `in_state`.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    /// National sample map with filters, layers and recommendations.
    Map,
    /// NYC markers and the searchable tract table.
    Nyc,
    Dashboard,
    /// Education guide shown as a full page.
    Learn,
}

impl Page {
    /// Navigation bar order.
    pub const ALL: [Page; 5] = [
        Self::Home,
        Self::Map,
        Self::Nyc,
        Self::Dashboard,
        Self::Learn,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Map => "/map",
            Self::Nyc => "/nyc",
            Self::Dashboard => "/dashboard",
            Self::Learn => "/learn",
        }
    }

    /// Parses a route, tolerating a leading `#` and a trailing `/`.
    pub fn from_route(route: &str) -> Option<Self> {
        let trimmed = route.trim().trim_start_matches('#');
        let path = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self::ALL.into_iter().find(|p| p.route() == path)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Map => "Interactive Map",
            Self::Nyc => "NYC Data",
            Self::Dashboard => "Dashboard",
            Self::Learn => "Learn",
        }
    }

    /// Pages that draw the tract map behind the panels.
    pub fn shows_map(self) -> bool {
        matches!(self, Self::Map | Self::Nyc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_route(page.route()), Some(page));
        }
    }

    #[test]
    fn route_parsing_is_lenient() {
        assert_eq!(Page::from_route("#/nyc"), Some(Page::Nyc));
        assert_eq!(Page::from_route("dashboard/"), Some(Page::Dashboard));
        assert_eq!(Page::from_route(""), Some(Page::Home));
        assert_eq!(Page::from_route("#"), Some(Page::Home));
        assert_eq!(Page::from_route("/settings"), None);
    }

    #[test]
    fn only_map_pages_show_map() {
        assert!(Page::Map.shows_map());
        assert!(Page::Nyc.shows_map());
        assert!(!Page::Dashboard.shows_map());
    }
}
