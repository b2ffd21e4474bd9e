//! Page components, one per route.

mod cloudflare;
mod dashboard;
mod login;
mod register;

pub use cloudflare::Cloudflare;
pub use dashboard::{Dashboard, StatusReadout};
pub use login::{login_destination, Login};
pub use register::{register_destination, Register};
