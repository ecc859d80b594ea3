//! Header language picker.

use std::rc::Rc;

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::app::dom;

const LANGUAGE_SELECTOR_ID: &str = "language-selector";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: [Language; 4] = [
    Language { code: "en", name: "English" },
    Language { code: "hi", name: "हिंदी" },
    Language { code: "es", name: "Español" },
    Language { code: "fr", name: "Français" },
];

/// Look up a language by code, falling back to English.
pub fn language(code: &str) -> Language {
    LANGUAGES
        .iter()
        .copied()
        .find(|l| l.code == code)
        .unwrap_or(LANGUAGES[0])
}

#[component]
pub fn LanguageSelector(on_change: EventHandler<String>) -> Element {
    let mut open = use_signal(|| false);
    let mut selected = use_signal(|| LANGUAGES[0].code);

    use_hook(move || {
        Rc::new(dom::listen_outside_pointer(LANGUAGE_SELECTOR_ID, move || {
            let mut open = open;
            open.set(false);
        }))
    });

    let current = language(selected());
    let badge = current.code.to_uppercase();

    rsx! {
        div { id: LANGUAGE_SELECTOR_ID, class: "language-selector",
            Button {
                variant: ButtonVariant::Ghost,
                label: "Select language".to_string(),
                expanded: open(),
                onclick: move |_| open.toggle(),
                "{badge}"
            }
            if open() {
                ul { class: "language-menu", role: "listbox",
                    for lang in LANGUAGES {
                        li {
                            key: "{lang.code}",
                            role: "option",
                            "aria-selected": (lang.code == current.code).to_string(),
                            onclick: move |_| {
                                open.set(false);
                                if selected() != lang.code {
                                    selected.set(lang.code);
                                    on_change.call(lang.code.to_string());
                                }
                            },
                            "{lang.name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_lookup() {
        assert_eq!(language("hi").name, "हिंदी");
        assert_eq!(language("fr").code, "fr");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(language("de").code, "en");
    }
}
