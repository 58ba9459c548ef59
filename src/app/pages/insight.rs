//! AI insight page component.

use dioxus::prelude::*;

use crate::app::components::{InsightButton, Layout};

/// Coaching page hosting the insight trigger.
#[component]
pub fn Insight() -> Element {
    use_effect(|| {
        tracing::debug!("Psychee analyzed.");
    });

    rsx! {
        Layout {
            title: "AI Insight".to_string(),
            nav_active: "insight".to_string(),

            h2 { "AI Insight" }
            p { "Coaching feedback for your latest trade." }

            article { class: "coach-panel",
                h3 { "Insight" }
                p { "Request an insight to see coaching feedback here." }
                h3 { "Risk Pattern" }
                p { "No pattern detected yet." }
                h3 { "Coaching Tip" }
                p { "Log a trade first, then ask the coach." }
            }

            InsightButton {}
        }
    }
}
