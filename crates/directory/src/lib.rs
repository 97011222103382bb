pub mod db;
pub mod routes;
mod startup;
pub mod templates;
pub mod theme;
mod utils;

pub use db::{Database, LaboratoryData, LaboratorySummary};
pub use routes::*;
pub use startup::*;
pub use utils::*;
