pub mod directory;
pub mod roster;

pub use directory::DoctorDirectory;
pub use roster::generate_doctors;
