//! Dashboard page component.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Landing summary page.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            h1 { "Dashboard" }
            p { "Your trading journal at a glance." }

            section { class: "cards",
                article {
                    h2 { "Journal" }
                    p { "Log trades and review your history." }
                }
                article {
                    h2 { "Strategy Rules" }
                    p { "Keep your rules in sight and track discipline." }
                }
                article {
                    h2 { "AI Coach" }
                    p { "Request an insight on any logged trade." }
                    a { href: "/insight", "Go to AI Insight" }
                }
            }
        }
    }
}
