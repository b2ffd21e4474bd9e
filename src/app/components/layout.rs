//! Layout wrapping the device pages with the sidebar.

use dioxus::prelude::*;

use super::sidebar::Sidebar;
use crate::app::Route;

/// CSS styles for the application. Served inline; the device has no CDN access.
const CUSTOM_STYLES: &str = r#"
:root { font-family: system-ui, sans-serif; color: #e5e7eb; background: #111827; }
body { margin: 0; }
.layout { display: flex; min-height: 100vh; }
.layout aside { width: 12rem; background: #1f2937; padding: 1rem 0; }
.layout aside ul { list-style: none; margin: 0; padding: 0; }
.layout aside a { display: block; padding: 0.5rem 1rem; color: #d1d5db; text-decoration: none; }
.layout aside a:hover { background: #374151; color: #fff; }
.layout aside a.active { background: #111827; color: #fff; font-weight: 600; }
.layout main { flex: 1; padding: 1.5rem; }
.center { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; }
form { display: flex; flex-direction: column; gap: 0.75rem; max-width: 20rem; }
form label { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.9rem; }
input { padding: 0.5rem; border-radius: 0.25rem; border: 1px solid #4b5563; background: #1f2937; color: inherit; }
button { padding: 0.5rem 1rem; border: 0; border-radius: 0.25rem; background: #2563eb; color: #fff; cursor: pointer; }
"#;

/// Page chrome shared by Dashboard and Cloudflare.
#[component]
pub fn MainLayout() -> Element {
    rsx! {
        document::Title { "ESP32 Panel" }
        document::Style { {CUSTOM_STYLES} }

        div { class: "layout",
            Sidebar {}
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Standalone chrome for Login and Register: same styles, no sidebar.
#[component]
pub fn CenteredLayout(title: String, children: Element) -> Element {
    rsx! {
        document::Title { "{title} - ESP32 Panel" }
        document::Style { {CUSTOM_STYLES} }

        main { class: "center",
            h2 { "{title}" }
            {children}
        }
    }
}
