pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use error::HospitalError;
pub use models::*;
pub use router::hospital_routes;
pub use services::{HospitalService, IdSource, RandomIds};
pub use state::AppState;
