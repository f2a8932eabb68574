pub mod index;
pub mod registry;

pub use index::PatientIndex;
pub use registry::PatientRegistry;
