//! Sidebar navigation.

use dioxus::prelude::*;

use crate::app::Route;

/// One sidebar link
#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub to: Route,
}

/// Fixed sidebar entries, in display order
pub fn nav_entries() -> [NavEntry; 2] {
    [
        NavEntry {
            label: "Dashboard",
            to: Route::Dashboard {},
        },
        NavEntry {
            label: "Cloudflare",
            to: Route::Cloudflare {},
        },
    ]
}

/// Exact path match, no prefix matching
pub fn is_active(current_path: &str, target: &Route) -> bool {
    current_path == target.to_string()
}

/// Sidebar with the active link highlighted.
#[component]
pub fn Sidebar() -> Element {
    let current_path = use_route::<Route>().to_string();

    rsx! {
        aside {
            nav {
                ul {
                    for entry in nav_entries() {
                        li { key: "{entry.label}",
                            Link {
                                to: entry.to.clone(),
                                class: if is_active(&current_path, &entry.to) { "active" } else { "" },
                                "{entry.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
