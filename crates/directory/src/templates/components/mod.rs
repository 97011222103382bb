mod icons;

pub use icons::{location_icon, mail_icon};
