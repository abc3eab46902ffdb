//! In-app routing. The active page and the remount epoch live in global
//! signals; bumping the epoch re-keys the page subtree, which is what
//! "reload" means inside a desktop shell.

use dioxus::prelude::*;

/// The pages of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Projects,
    Contact,
    Demo,
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
            Route::Demo => "Demo",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "",
            Route::About => "about",
            Route::Projects => "projects",
            Route::Contact => "contact",
            Route::Demo => "demo",
        }
    }

    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::About,
            Route::Projects,
            Route::Contact,
            Route::Demo,
        ]
    }
}

/// The page currently shown.
pub static ACTIVE_ROUTE: GlobalSignal<Route> = GlobalSignal::new(Route::default);

/// Bumped to force a fresh mount of the page subtree.
pub static REMOUNT_EPOCH: GlobalSignal<u64> = GlobalSignal::new(|| 0);

pub fn navigate(route: Route) {
    if *ACTIVE_ROUTE.peek() != route {
        tracing::debug!(to = route.label(), "navigating");
        *ACTIVE_ROUTE.write() = route;
    }
}

pub fn remount() {
    *REMOUNT_EPOCH.write() += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_a_distinct_path() {
        let mut paths: Vec<_> = Route::all().iter().map(Route::path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Route::all().len());
    }

    #[test]
    fn home_is_the_default_route() {
        assert_eq!(Route::default(), Route::Home);
        assert_eq!(Route::Home.path(), "");
    }
}
