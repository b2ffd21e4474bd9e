//! Shared UI components for the web UI.

pub mod credentials_form;
pub mod layout;
pub mod sidebar;

pub use credentials_form::{Credentials, CredentialsForm};
pub use layout::{CenteredLayout, MainLayout};
pub use sidebar::Sidebar;
