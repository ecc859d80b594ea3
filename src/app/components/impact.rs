//! Environmental impact cards with staggered counters.

use dioxus::prelude::*;

use crate::app::dom;
use crate::impact::{format_thousands, stagger, AnimatedCounter, ImpactStat, COUNTER_DURATION, IMPACT_STATS};

#[component]
pub fn Impact() -> Element {
    rsx! {
        section { class: "impact", id: "impact",
            div { class: "impact-heading",
                h2 { "Our Environmental Impact" }
                p { "Every delivery on our electric fleet cuts emissions for the cities we serve." }
            }
            div { class: "impact-grid",
                for (index, stat) in IMPACT_STATS.iter().enumerate() {
                    ImpactCard { key: "{stat.key}", stat: *stat, index }
                }
            }
        }
    }
}

#[component]
fn ImpactCard(stat: ImpactStat, index: usize) -> Element {
    let mut count = use_signal(|| 0u64);

    use_effect(move || {
        spawn(async move {
            dom::sleep(stagger(index)).await;
            let mut counter = AnimatedCounter::new(stat.value, COUNTER_DURATION);
            while let Some(value) = counter.tick() {
                dom::sleep(AnimatedCounter::frame_interval()).await;
                count.set(value);
            }
        });
    });

    let value = format_thousands(count());

    rsx! {
        div { class: "impact-card",
            p { class: "impact-value", "{value}{stat.suffix}" }
            h3 { "{stat.title}" }
            p { class: "impact-description", "{stat.description}" }
        }
    }
}
