//! Cloudflare page component.
//!
//! Four-field credentials form. Submit is fire-and-forget: the device's answer
//! is never shown.

use std::future::Future;

use dioxus::prelude::*;

use crate::app::api::{submit_cloudflare, use_device, CloudflareConfig, CloudflareField, Device};

/// Input handler: replace one field of the form state
pub fn update_field(mut config: Signal<CloudflareConfig>, field: CloudflareField, value: String) {
    config.write().set(field, value);
}

/// Submit handler: snapshot the form now, return the single POST to run
pub fn submission(config: Signal<CloudflareConfig>, device: Device) -> impl Future<Output = ()> {
    let snapshot = config.cloned();
    async move { submit_cloudflare(device.api(), &snapshot).await }
}

/// Cloudflare page component.
#[component]
pub fn Cloudflare() -> Element {
    let device = use_device();
    let config = use_signal(CloudflareConfig::default);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        spawn(submission(config, device.clone()));
    };

    rsx! {
        section {
            h2 { "Cloudflare Config" }
            form { onsubmit: on_submit,
                for (field, name, caption) in CloudflareField::ALL.map(|f| (f, f.name(), f.label())) {
                    label { key: "{name}",
                        "{caption}"
                        input {
                            r#type: field.input_type(),
                            name: name,
                            value: config.read().get(field).to_string(),
                            required: true,
                            oninput: move |e| update_field(config, field, e.value()),
                        }
                    }
                }
                button { r#type: "submit", "Salvar" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::api::tests::FakeDevice;
    use crate::app::testing;
    use std::rc::Rc;

    /// Types into every field through the input handler, then submits once.
    #[component]
    fn TypeAndSubmit(device: Device, values: Vec<String>) -> Element {
        let config = use_signal(CloudflareConfig::default);
        use_hook(move || {
            for (field, value) in CloudflareField::ALL.into_iter().zip(values) {
                update_field(config, field, value);
            }
            tokio_test::block_on(submission(config, device));
        });
        rsx! {}
    }

    #[test]
    fn test_form_has_four_named_inputs_in_order() {
        let dom = testing::mount("/cloudflare", Device::new(FakeDevice::default()));
        let html = dioxus_ssr::render(&dom);

        let positions: Vec<usize> = CloudflareField::ALL
            .iter()
            .map(|f| {
                html.find(&format!("name=\"{}\"", f.name()))
                    .unwrap_or_else(|| panic!("missing input {} in {}", f.name(), html))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", html);

        assert!(html.contains("type=\"password\""), "{}", html);
        assert!(html.contains("Salvar"), "{}", html);
    }

    #[test]
    fn test_submit_posts_current_fields_once() {
        let device = Rc::new(FakeDevice::default());
        let values = ["tok", "zone-id", "record-id", "esp.example.com"]
            .map(String::from)
            .to_vec();
        let mut dom = VirtualDom::new_with_props(
            TypeAndSubmit,
            TypeAndSubmitProps {
                device: Device::new_shared(device.clone()),
                values,
            },
        );
        dom.rebuild_in_place();

        let posted = device.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(
            posted[0],
            serde_json::json!({
                "cf_token": "tok",
                "cf_zone": "zone-id",
                "cf_record": "record-id",
                "cf_host": "esp.example.com"
            })
        );
        assert_eq!(*device.status_calls.borrow(), 0);
    }

    #[test]
    fn test_failed_write_is_not_surfaced() {
        let device = Rc::new(FakeDevice {
            fail_writes: true,
            ..Default::default()
        });
        let mut dom = VirtualDom::new_with_props(
            TypeAndSubmit,
            TypeAndSubmitProps {
                device: Device::new_shared(device.clone()),
                values: vec![String::new(); 4],
            },
        );
        dom.rebuild_in_place();

        assert_eq!(device.posted.borrow().len(), 1);
        assert!(!dioxus_ssr::render(&dom).contains("failed"));
    }
}
