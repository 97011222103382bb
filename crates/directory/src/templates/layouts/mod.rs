mod base;

pub use base::{base, PageMeta, ThemeStyles};
