//! ESP32 Panel
//!
//! Web front-end for an ESP32 device that reports its health and keeps a
//! Cloudflare DNS record pointed at itself.
//!
//! This library provides:
//! - Web UI (Dioxus + router): login, registration, status dashboard and
//!   Cloudflare credentials form
//! - Typed client for the device API (`/api/status`, `/api/cloudflare`)
//! - Gateway host that serves the compiled UI and forwards `/api/*` to the
//!   device (`server` feature)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (compiled to WASM for the browser)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod gateway;
