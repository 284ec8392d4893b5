//! Hash router with exact, strict matching.
//!
//! Only `/` and `/wallet` are mapped. Anything else, including a trailing
//! slash variant such as `/wallet/`, matches nothing and no page renders.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Wallet,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Wallet];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Wallet => "/wallet",
        }
    }

    /// Translation key of the navigation label.
    pub fn label_key(self) -> &'static str {
        match self {
            Route::Home => "header.home",
            Route::Wallet => "header.wallet",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    pub fn new() -> Self {
        Self
    }

    /// Path part of a hash location: `https://host/#/wallet?x=1` → `/wallet`.
    /// A bare path is taken as the hash. A URL without a hash, like an empty
    /// hash, is the root.
    pub fn path_of(location: &str) -> &str {
        let hash = match location.find('#') {
            Some(idx) => &location[idx + 1..],
            None if location.is_empty() || location.starts_with('/') => location,
            None => "",
        };
        let path = hash.split(['?', '#']).next().unwrap_or("");
        if path.is_empty() {
            "/"
        } else {
            path
        }
    }

    pub fn resolve(&self, location: &str) -> Option<Route> {
        let path = Self::path_of(location);
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_paths() {
        let router = Router::new();
        assert_eq!(router.resolve("/"), Some(Route::Home));
        assert_eq!(router.resolve("#/"), Some(Route::Home));
        assert_eq!(router.resolve(""), Some(Route::Home));
        assert_eq!(router.resolve("#/wallet"), Some(Route::Wallet));
        assert_eq!(
            router.resolve("https://nftmart.io/#/wallet?tab=assets"),
            Some(Route::Wallet)
        );
        assert_eq!(router.resolve("https://nftmart.io/"), Some(Route::Home));
        assert_eq!(router.resolve("https://nftmart.io/#"), Some(Route::Home));
        assert_eq!(router.resolve("https://nftmart.io/wallet"), Some(Route::Home));
    }

    #[test]
    fn test_unmapped_paths_match_nothing() {
        let router = Router::new();
        assert_eq!(router.resolve("/unknown"), None);
        assert_eq!(router.resolve("#/wallet/"), None);
        assert_eq!(router.resolve("#/wallet/assets"), None);
        assert_eq!(router.resolve("#/Wallet"), None);
    }
}
