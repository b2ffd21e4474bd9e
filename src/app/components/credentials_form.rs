//! Username/password form shared by Login and Register.

use dioxus::prelude::*;

/// Username/password pair typed into Login or Register
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Both fields filled in
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Two inputs bound to `credentials`; submit hands the current pair to `on_submit`.
#[component]
pub fn CredentialsForm(
    credentials: Signal<Credentials>,
    button: String,
    on_submit: EventHandler<Credentials>,
) -> Element {
    let mut credentials = credentials;

    rsx! {
        form {
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(credentials.cloned());
            },
            input {
                placeholder: "Usuário",
                value: credentials.read().username.clone(),
                oninput: move |e| credentials.write().username = e.value(),
            }
            input {
                placeholder: "Senha",
                r#type: "password",
                value: credentials.read().password.clone(),
                oninput: move |e| credentials.write().password = e.value(),
            }
            button { r#type: "submit", "{button}" }
        }
    }
}
