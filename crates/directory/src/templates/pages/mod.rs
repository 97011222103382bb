pub mod home;

pub use home::{home_content, home_page, labs_heading, HOME_META};
