pub mod health;
pub mod ui;

pub use health::health_handler;
pub use ui::*;
