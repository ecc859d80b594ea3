//! Page bodies rendered below the navbar.

mod home;
mod section;

pub use home::Home;
pub use section::{page_title, Section};
