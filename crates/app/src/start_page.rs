//! Initial page selection.
//!
//! Natively the route comes from the `FOOD_ATLAS_PAGE` environment variable;
//! in the browser it is the URL hash (`index.html#/nyc`). Unknown or missing
//! routes fall back to the home page.

use bevy::prelude::*;

use tracts::Page;

/// Page to switch to on the first frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPage(pub Page);

impl StartPage {
    pub fn from_route(route: Option<&str>) -> Self {
        match route {
            Some(route) => match Page::from_route(route) {
                Some(page) => Self(page),
                None => {
                    warn!("Unknown start route {route:?}, opening home");
                    Self(Page::Home)
                }
            },
            None => Self(Page::Home),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        let route = std::env::var(tracts::config::START_PAGE_ENV).ok();
        Self::from_route(route.as_deref())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let hash = web_sys::window().and_then(|w| w.location().hash().ok());
        Self::from_route(hash.as_deref().filter(|h| !h.is_empty()))
    }
}

pub fn apply_start_page(start: Res<StartPage>, mut next_page: ResMut<NextState<Page>>) {
    if start.0 != Page::Home {
        info!("Starting on {}", start.0.route());
        next_page.set(start.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_route_opens_home() {
        assert_eq!(StartPage::from_route(None), StartPage(Page::Home));
    }

    #[test]
    fn test_hash_route_selects_page() {
        assert_eq!(StartPage::from_route(Some("#/nyc")), StartPage(Page::Nyc));
        assert_eq!(StartPage::from_route(Some("dashboard")), StartPage(Page::Dashboard));
    }

    #[test]
    fn test_unknown_route_falls_back_to_home() {
        assert_eq!(StartPage::from_route(Some("/nowhere")), StartPage(Page::Home));
    }
}
