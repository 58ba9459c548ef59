//! Insight trigger button with transient busy feedback.

use dioxus::prelude::*;

use crate::feedback::{InsightFeedback, BUSY_LABEL};

/// Resting label of the insight trigger.
const INSIGHT_LABEL: &str = "Get Insight";

/// Button that swaps to a busy label on click and restores itself after
/// the fixed feedback delay. The page stays responsive in between.
#[component]
pub fn InsightButton() -> Element {
    let mut feedback = use_signal(InsightFeedback::default);
    let mut label = use_signal(|| INSIGHT_LABEL.to_string());

    let busy = feedback.read().is_busy();

    rsx! {
        button {
            class: "insight-btn",
            disabled: busy,
            style: if busy { "opacity: 0.7;" } else { "opacity: 1;" },
            onclick: move |_| {
                let token = feedback.write().press(label());
                label.set(BUSY_LABEL.to_string());
                spawn(async move {
                    restore_delay().await;
                    if let Some(original) = feedback.write().expire(token) {
                        label.set(original);
                    }
                });
            },
            "{label}"
        }
    }
}

// ============ WASM-only helpers ============

/// Non-blocking wait for the feedback window (a Promise-wrapped setTimeout).
#[cfg(target_arch = "wasm32")]
async fn restore_delay() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                crate::feedback::RESTORE_DELAY_MS,
            );
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn restore_delay() {}
