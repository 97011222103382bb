mod error;
mod home;

pub use error::PageError;
pub use home::home_handler;
