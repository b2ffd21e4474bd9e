//! Login page.
//!
//! Placeholder gate: any non-empty username/password pair gets in. Nothing is
//! checked against the device.

use dioxus::prelude::*;

use crate::app::components::{CenteredLayout, Credentials, CredentialsForm};
use crate::app::Route;

/// Where a login submit leads, if anywhere
pub fn login_destination(credentials: &Credentials) -> Option<Route> {
    credentials.is_complete().then_some(Route::Dashboard {})
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let nav = navigator();
    let credentials = use_signal(Credentials::default);

    rsx! {
        CenteredLayout { title: "Login".to_string(),
            CredentialsForm {
                credentials,
                button: "Entrar".to_string(),
                on_submit: move |user: Credentials| {
                    // Empty fields: stay here, no message
                    if let Some(to) = login_destination(&user) {
                        if nav.push(to).is_some() {
                            tracing::warn!("Navigation after login failed");
                        }
                    }
                },
            }
        }
    }
}
