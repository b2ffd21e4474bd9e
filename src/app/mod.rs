//! Dioxus application entry point.
//!
//! This module provides the root App component and the route table. Login and
//! Register stand alone; Dashboard and Cloudflare share the sidebar layout.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;

use api::Device;
use components::MainLayout;
use pages::{Cloudflare, Dashboard, Login, Register};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    use_context_provider(Device::http);

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    #[layout(MainLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/cloudflare")]
        Cloudflare {},
    #[end_layout]

    // Anything else renders a blank page
    #[route("/:..segments")]
    Unmatched { segments: Vec<String> },
}

/// Blank page for paths outside the route table.
#[component]
fn Unmatched(segments: Vec<String>) -> Element {
    tracing::debug!(path = %format!("/{}", segments.join("/")), "No page for path");
    rsx! {}
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::api::tests::FakeDevice;
    use std::str::FromStr;

    #[test]
    fn test_known_paths_select_one_page() {
        assert!(matches!(Route::from_str("/login"), Ok(Route::Login {})));
        assert!(matches!(Route::from_str("/register"), Ok(Route::Register {})));
        assert!(matches!(Route::from_str("/"), Ok(Route::Dashboard {})));
        assert!(matches!(
            Route::from_str("/cloudflare"),
            Ok(Route::Cloudflare {})
        ));
    }

    #[test]
    fn test_unknown_path_is_unmatched() {
        match Route::from_str("/settings") {
            Ok(Route::Unmatched { segments }) => assert_eq!(segments, vec!["settings"]),
            other => panic!("expected unmatched route, got {:?}", other.ok()),
        }
        assert!(matches!(
            Route::from_str("/cloudflare/extra"),
            Ok(Route::Unmatched { .. })
        ));
    }

    #[test]
    fn test_unknown_path_renders_blank() {
        let dom = testing::mount("/nope", Device::new(FakeDevice::default()));
        let html = dioxus_ssr::render(&dom);
        for tag in ["<aside", "<nav", "<main", "<section", "<form", "<h2"] {
            assert!(!html.contains(tag), "{} in {}", tag, html);
        }
    }

    #[test]
    fn test_layout_pages_share_sidebar() {
        for path in ["/", "/cloudflare"] {
            let dom = testing::mount(path, Device::new(FakeDevice::default()));
            let html = dioxus_ssr::render(&dom);
            assert!(html.contains("<aside"), "{}: {}", path, html);
            assert!(html.contains("<main"), "{}: {}", path, html);
        }
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::Register {}.to_string(), "/register");
        assert_eq!(Route::Dashboard {}.to_string(), "/");
        assert_eq!(Route::Cloudflare {}.to_string(), "/cloudflare");
    }
}
