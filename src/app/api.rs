//! Device API client shared by the pages.
//!
//! The device exposes two endpoints: `GET /api/status` and
//! `POST /api/cloudflare`. In the browser requests go through `gloo-net`
//! (same origin); natively they go through `reqwest` against a base URL.
//! Pages get the device from context via [`use_device`].

use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Status endpoint path
pub const STATUS_PATH: &str = "/api/status";

/// Cloudflare configuration endpoint path
pub const CLOUDFLARE_PATH: &str = "/api/cloudflare";

/// Errors talking to the device
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no HTTP client available on this target")]
    Unsupported,
}

/// Device health snapshot (GET /api/status)
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DeviceStatus {
    /// CPU load in percent
    pub cpu: f64,
    /// Memory usage in percent
    pub mem: f64,
    /// Seconds since boot
    pub uptime: f64,
}

/// Cloudflare DNS updater credentials (POST /api/cloudflare)
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct CloudflareConfig {
    #[serde(rename = "cf_token")]
    pub token: String,
    #[serde(rename = "cf_zone")]
    pub zone: String,
    #[serde(rename = "cf_record")]
    pub record: String,
    #[serde(rename = "cf_host")]
    pub host: String,
}

/// One input of the Cloudflare form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudflareField {
    Token,
    Zone,
    Record,
    Host,
}

impl CloudflareField {
    /// All fields in form order
    pub const ALL: [CloudflareField; 4] = [Self::Token, Self::Zone, Self::Record, Self::Host];

    /// Wire name, also used as the input's `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            Self::Token => "cf_token",
            Self::Zone => "cf_zone",
            Self::Record => "cf_record",
            Self::Host => "cf_host",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Token => "Token",
            Self::Zone => "Zone",
            Self::Record => "Record",
            Self::Host => "Host",
        }
    }

    /// Token is masked, the rest are plain text
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Token => "password",
            _ => "text",
        }
    }
}

impl CloudflareConfig {
    pub fn get(&self, field: CloudflareField) -> &str {
        match field {
            CloudflareField::Token => &self.token,
            CloudflareField::Zone => &self.zone,
            CloudflareField::Record => &self.record,
            CloudflareField::Host => &self.host,
        }
    }

    /// Replace a single field, leaving the others untouched
    pub fn set(&mut self, field: CloudflareField, value: String) {
        match field {
            CloudflareField::Token => self.token = value,
            CloudflareField::Zone => self.zone = value,
            CloudflareField::Record => self.record = value,
            CloudflareField::Host => self.host = value,
        }
    }
}

/// Operations the UI needs from the device.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait DeviceApi {
    async fn status(&self) -> Result<DeviceStatus, ApiError>;
    async fn save_cloudflare(&self, config: &CloudflareConfig) -> Result<(), ApiError>;
}

/// Device reached over HTTP.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpDevice {
    /// Prefix for endpoint paths; empty means same origin
    pub base_url: String,
}

impl HttpDevice {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl DeviceApi for HttpDevice {
    async fn status(&self) -> Result<DeviceStatus, ApiError> {
        fetch_json(&self.url(STATUS_PATH)).await
    }

    async fn save_cloudflare(&self, config: &CloudflareConfig) -> Result<(), ApiError> {
        post_json_no_response(&self.url(CLOUDFLARE_PATH), config).await
    }
}

/// Device handle provided through Dioxus context.
#[derive(Clone)]
pub struct Device(Rc<dyn DeviceApi>);

impl Device {
    pub fn new(api: impl DeviceApi + 'static) -> Self {
        Self(Rc::new(api))
    }

    /// Same-origin HTTP device, what the browser build uses
    pub fn http() -> Self {
        Self::new(HttpDevice::default())
    }

    pub fn api(&self) -> &dyn DeviceApi {
        self.0.as_ref()
    }

    /// Wrap a device the caller keeps a handle to
    pub fn new_shared<T: DeviceApi + 'static>(api: Rc<T>) -> Self {
        Self(api)
    }
}

// Same handle, same device
impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Device from context, falling back to same-origin HTTP.
pub fn use_device() -> Device {
    use_hook(|| try_consume_context::<Device>().unwrap_or_else(Device::http))
}

/// Single status fetch for the dashboard.
///
/// Failures are logged and yield the zero snapshot. No retry.
pub async fn load_status<D: DeviceApi + ?Sized>(device: &D) -> DeviceStatus {
    match device.status().await {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("Failed to load device status: {}", e);
            DeviceStatus::default()
        }
    }
}

/// Single Cloudflare write. The outcome is only logged.
pub async fn submit_cloudflare<D: DeviceApi + ?Sized>(device: &D, config: &CloudflareConfig) {
    if let Err(e) = device.save_cloudflare(config).await {
        tracing::warn!("Cloudflare config write failed: {}", e);
    }
}

/// GET a URL and parse the body as JSON.
///
/// The body is parsed whatever the HTTP status, like `fetch(..).then(r => r.json())`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let body = transport::get_text(url).await?;
    Ok(serde_json::from_str(&body)?)
}

/// POST a JSON body and ignore the response content.
pub async fn post_json_no_response<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<(), ApiError> {
    transport::post_json(url, body).await
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

// Browser: Fetch API through gloo-net, relative URLs resolve against the page origin
#[cfg(target_arch = "wasm32")]
mod transport {
    use super::ApiError;
    use gloo_net::http::Request;
    use serde::Serialize;

    pub(super) async fn get_text(url: &str) -> Result<String, ApiError> {
        Ok(Request::get(url).send().await?.text().await?)
    }

    pub(super) async fn post_json<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<(), ApiError> {
        Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)?
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
mod transport {
    use super::ApiError;
    use serde::Serialize;

    pub(super) async fn get_text(url: &str) -> Result<String, ApiError> {
        Ok(reqwest::get(url).await?.text().await?)
    }

    pub(super) async fn post_json<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<(), ApiError> {
        reqwest::Client::new().post(url).json(body).send().await?;
        Ok(())
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
mod transport {
    use super::ApiError;
    use serde::Serialize;

    pub(super) async fn get_text(_url: &str) -> Result<String, ApiError> {
        Err(ApiError::Unsupported)
    }

    pub(super) async fn post_json<B: Serialize + ?Sized>(_url: &str, _body: &B) -> Result<(), ApiError> {
        Err(ApiError::Unsupported)
    }
}
