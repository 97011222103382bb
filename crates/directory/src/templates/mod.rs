pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::lab_card;
pub use layouts::{PageMeta, ThemeStyles};
pub use pages::{home_content, home_page, labs_heading};
