//! Register page. Submitting always returns to login; nothing is stored.

use dioxus::prelude::*;

use crate::app::components::{CenteredLayout, Credentials, CredentialsForm};
use crate::app::Route;

/// Where a register submit leads: always back to login
pub fn register_destination(_credentials: &Credentials) -> Route {
    Route::Login {}
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = navigator();
    let credentials = use_signal(Credentials::default);

    rsx! {
        CenteredLayout { title: "Registrar".to_string(),
            CredentialsForm {
                credentials,
                button: "Criar conta".to_string(),
                on_submit: move |user: Credentials| {
                    if nav.push(register_destination(&user)).is_some() {
                        tracing::warn!("Navigation after register failed");
                    }
                },
            }
        }
    }
}
