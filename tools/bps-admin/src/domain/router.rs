//! Location holder behind the transition engine's [`Navigator`] port.
//!
//! The engine writes the location at the transition midpoint; the UI
//! follows it through [`RouteNavigator::subscribe`]. Redirects (auth guard,
//! unknown paths) use [`RouteNavigator::replace`], which skips history.

use bps_01_page_transition::{EffectError, Navigator};
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, info};

use super::route::Route;

pub struct RouteNavigator {
    location: watch::Sender<String>,
    history: RwLock<Vec<Route>>,
}

impl RouteNavigator {
    pub fn new(initial: Route) -> Self {
        let (location, _) = watch::channel(initial.path());
        Self {
            location,
            history: RwLock::new(vec![initial]),
        }
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.location.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.location.subscribe()
    }

    /// Routes visited, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.history.read().clone()
    }

    /// Jump to `route` without recording it (redirects).
    pub fn replace(&self, route: Route) {
        info!(to = %route, "[bps-admin] Redirect");
        if let Some(last) = self.history.write().last_mut() {
            *last = route;
        }
        self.location.send_replace(route.path());
    }
}

impl Navigator for RouteNavigator {
    fn current_location(&self) -> String {
        self.location.borrow().clone()
    }

    fn set_location(&self, target: &str) {
        let route = Route::parse(target);
        self.history.write().push(route);
        self.location.send_replace(route.path());
    }

    fn prefetch(&self, target: &str) -> Result<(), EffectError> {
        debug!(target, route = %Route::parse(target), "[bps-admin] Preloading screen");
        Ok(())
    }
}
