//! Site header and landing-page components.

pub mod button;
pub mod impact;
pub mod language_selector;
pub mod mobile_sheet;
pub mod navbar;
pub mod pill_nav;

pub use button::{Button, ButtonVariant, LinkButton};
pub use impact::Impact;
pub use language_selector::LanguageSelector;
pub use mobile_sheet::MobileSheet;
pub use navbar::Navbar;
pub use pill_nav::PillNav;
