use dioxus::prelude::*;

/// Embedded button CSS
const BUTTON_CSS: &str = include_str!("./button.css");

#[derive(Copy, Clone, PartialEq, Default)]
#[non_exhaustive]
pub enum ButtonVariant {
    #[default]
    Pill,
    NavPill,
    NavPillActive,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Pill => "pill",
            ButtonVariant::NavPill => "nav-pill",
            ButtonVariant::NavPillActive => "nav-pill-active",
            ButtonVariant::Ghost => "ghost",
        }
    }

    /// Pill variant for a root nav item.
    pub fn nav(active: bool) -> Self {
        if active {
            ButtonVariant::NavPillActive
        } else {
            ButtonVariant::NavPill
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    /// Rendered as `aria-expanded` when set (disclosure buttons)
    expanded: Option<bool>,
    /// Rendered as `aria-label` when set
    label: Option<String>,
    #[props(extends=GlobalAttributes)]
    #[props(extends=button)]
    attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Style { {BUTTON_CSS} }

        button {
            r#type: "button",
            class: "button",
            "data-style": variant.class(),
            "aria-expanded": expanded.map(|e| e.to_string()),
            "aria-label": label,
            onclick: move |event| {
                if let Some(f) = &onclick {
                    f.call(event);
                }
            },
            onkeydown: move |event| {
                if let Some(f) = &onkeydown {
                    f.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

/// Anchor styled as a button.
#[component]
pub fn LinkButton(
    #[props(default)] variant: ButtonVariant,
    href: String,
    label: Option<String>,
    #[props(extends=GlobalAttributes)]
    #[props(extends=a)]
    attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Style { {BUTTON_CSS} }

        a {
            class: "button",
            href: "{href}",
            "data-style": variant.class(),
            "aria-label": label,
            onclick: move |event| {
                if let Some(f) = &onclick {
                    f.call(event);
                }
            },
            onkeydown: move |event| {
                if let Some(f) = &onkeydown {
                    f.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}
