//! Screens and their paths.
//!
//! | Path | Route | Signed-in only |
//! |------|-------|----------------|
//! | `/` | `Home` | yes |
//! | `/login`, `/auth` | `Login` | no |
//! | `/publications`, `/daftar-publikasi` | `Publications` | yes |
//! | `/publications/add`, `/tambah-publikasi` | `AddPublication` | yes |
//! | `/publications/edit/{id}`, `/edit-publication/{id}` | `EditPublication` | yes |
//! | `/galeri-kegiatan` | `Gallery` | yes |
//!
//! Anything else resolves to `Home`.

use std::fmt;

use bps_01_page_transition::Direction;
use shared_types::PublicationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Publications,
    AddPublication,
    EditPublication(PublicationId),
    Gallery,
}

impl Route {
    /// Resolve a location. Query strings and trailing slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        match path {
            "" => Route::Home,
            "/login" | "/auth" => Route::Login,
            "/publications" | "/daftar-publikasi" => Route::Publications,
            "/publications/add" | "/tambah-publikasi" => Route::AddPublication,
            "/galeri-kegiatan" => Route::Gallery,
            other => other
                .strip_prefix("/publications/edit/")
                .or_else(|| other.strip_prefix("/edit-publication/"))
                .and_then(|id| id.parse::<PublicationId>().ok())
                .map(Route::EditPublication)
                .unwrap_or(Route::Home),
        }
    }

    /// Canonical path.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Publications => "/publications".to_string(),
            Route::AddPublication => "/publications/add".to_string(),
            Route::EditPublication(id) => format!("/publications/edit/{id}"),
            Route::Gallery => "/galeri-kegiatan".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// The login screen is shown without the header bar.
    pub fn shows_header(&self) -> bool {
        !matches!(self, Route::Login)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Beranda",
            Route::Login => "Masuk",
            Route::Publications => "Daftar Publikasi",
            Route::AddPublication => "Tambah Publikasi",
            Route::EditPublication(_) => "Edit Publikasi",
            Route::Gallery => "Galeri Kegiatan",
        }
    }

    /// Where "back" leads from this screen.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::AddPublication | Route::EditPublication(_) => Some(Route::Publications),
            Route::Publications | Route::Gallery => Some(Route::Home),
            Route::Home | Route::Login => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Header navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub hotkey: char,
    pub label: &'static str,
    pub route: Route,
}

impl NavItem {
    /// Whether this entry is highlighted while `current` is shown.
    pub fn is_active(&self, current: Route) -> bool {
        self.route == current
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        hotkey: '1',
        label: "Beranda",
        route: Route::Home,
    },
    NavItem {
        hotkey: '2',
        label: "Daftar Publikasi",
        route: Route::Publications,
    },
    NavItem {
        hotkey: '3',
        label: "Tambah Publikasi",
        route: Route::AddPublication,
    },
    NavItem {
        hotkey: '4',
        label: "Galeri Kegiatan",
        route: Route::Gallery,
    },
];

pub fn nav_item_for(hotkey: char) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.hotkey == hotkey)
}

/// Forward navigation slides up, going back slides down.
pub fn direction_for(back: bool) -> Direction {
    if back {
        Direction::Down
    } else {
        Direction::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths_and_aliases() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/auth"), Route::Login);
        assert_eq!(Route::parse("/publications/"), Route::Publications);
        assert_eq!(Route::parse("/daftar-publikasi"), Route::Publications);
        assert_eq!(Route::parse("/tambah-publikasi"), Route::AddPublication);
        assert_eq!(
            Route::parse("/publications/edit/12"),
            Route::EditPublication(PublicationId(12))
        );
        assert_eq!(
            Route::parse("/edit-publication/3?from=list"),
            Route::EditPublication(PublicationId(3))
        );
    }

    #[test]
    fn test_unknown_paths_resolve_home() {
        assert_eq!(Route::parse("/nowhere"), Route::Home);
        assert_eq!(Route::parse("/publications/edit/abc"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn test_path_round_trips() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Publications,
            Route::AddPublication,
            Route::EditPublication(PublicationId(7)),
            Route::Gallery,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Login.shows_header());
        assert!(Route::Gallery.requires_auth());
        assert!(Route::Home.shows_header());
    }

    #[test]
    fn test_nav_hotkeys() {
        assert_eq!(nav_item_for('2').unwrap().label, "Daftar Publikasi");
        assert!(nav_item_for('9').is_none());
        assert!(NAV_ITEMS[2].is_active(Route::AddPublication));
        assert_eq!(direction_for(true), Direction::Down);
        assert_eq!(
            Route::EditPublication(PublicationId(1)).parent(),
            Some(Route::Publications)
        );
    }
}
