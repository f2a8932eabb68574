pub mod hospital;
pub mod ids;
pub mod specialist;

pub use hospital::HospitalService;
pub use ids::{IdSource, RandomIds};
pub use specialist::{specialist_for, DISEASE_SPECIALIST};
