use dioxus::prelude::*;

use crate::app::components::{Impact, LinkButton};

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Sustainable Last-Mile Delivery" }
            p { class: "hero-subtitle",
                "Electric vehicles, trained riders and smart routing for faster, cleaner deliveries."
            }
            LinkButton { href: "/delivery-partner".to_string(), "Become a Partner" }
        }
        Impact {}
    }
}
