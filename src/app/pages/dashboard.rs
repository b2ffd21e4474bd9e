//! Dashboard page component.
//!
//! Fetches one status snapshot from the device on mount and shows it.

use dioxus::prelude::*;

use crate::app::api::{load_status, use_device, DeviceStatus};

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let device = use_device();

    // One fetch per mount; the task is dropped with the page
    let status = use_resource(move || {
        let device = device.clone();
        async move { load_status(device.api()).await }
    });

    // Zeros until the fetch resolves
    let info = status.read().clone().unwrap_or_default();

    rsx! {
        section {
            h2 { "Dashboard" }
            StatusReadout { status: info }
        }
    }
}

/// The three status lines.
#[component]
pub fn StatusReadout(status: DeviceStatus) -> Element {
    rsx! {
        p { b { "CPU:" } " {status.cpu}%" }
        p { b { "Memória:" } " {status.mem}%" }
        p { b { "Uptime:" } " {status.uptime}s" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::api::{tests::FakeDevice, Device};
    use crate::app::testing;
    use std::rc::Rc;

    fn render(status: DeviceStatus) -> String {
        dioxus_ssr::render_element(rsx! { StatusReadout { status } })
    }

    #[test]
    fn test_renders_device_values() {
        let html = render(DeviceStatus {
            cpu: 42.0,
            mem: 67.0,
            uptime: 1000.0,
        });
        assert!(html.contains("CPU:"), "{}", html);
        assert!(html.contains(" 42%"), "{}", html);
        assert!(html.contains("Memória:"), "{}", html);
        assert!(html.contains(" 67%"), "{}", html);
        assert!(html.contains("Uptime:"), "{}", html);
        assert!(html.contains(" 1000s"), "{}", html);
    }

    #[test]
    fn test_fractional_values_keep_decimals() {
        let html = render(DeviceStatus {
            cpu: 12.5,
            mem: 0.0,
            uptime: 3.0,
        });
        assert!(html.contains(" 12.5%"), "{}", html);
        assert!(html.contains(" 3s"), "{}", html);
    }

    #[test]
    fn test_mount_fetches_once_and_shows_status() {
        let device = Rc::new(FakeDevice {
            status: Some(DeviceStatus {
                cpu: 42.0,
                mem: 67.0,
                uptime: 1000.0,
            }),
            ..Default::default()
        });
        let mut dom = testing::mount("/", Device::new_shared(device.clone()));

        // Defaults before the response lands
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(" 0%"), "{}", html);

        testing::settle_until(&mut dom, || *device.status_calls.borrow() > 0);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(" 42%"), "{}", html);
        assert!(html.contains(" 67%"), "{}", html);
        assert!(html.contains(" 1000s"), "{}", html);
        assert_eq!(*device.status_calls.borrow(), 1);
    }

    #[test]
    fn test_failed_fetch_keeps_zeros() {
        let device = Rc::new(FakeDevice::default());
        let mut dom = testing::mount("/", Device::new_shared(device.clone()));

        testing::settle_until(&mut dom, || *device.status_calls.borrow() > 0);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(" 0%"), "{}", html);
        assert!(html.contains(" 0s"), "{}", html);
        assert_eq!(*device.status_calls.borrow(), 1);
    }
}
