use thiserror::Error;

use doctor_cell::Specialization;
use shared_models::error::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HospitalError {
    #[error("Patient not found")]
    PatientNotFound,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Wrong doctor selected! Patient needs {required}")]
    SpecializationMismatch { required: Specialization },

    #[error("No free patient id after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },
}

impl From<HospitalError> for AppError {
    fn from(err: HospitalError) -> Self {
        match err {
            HospitalError::PatientNotFound | HospitalError::DoctorNotFound => {
                AppError::NotFound(err.to_string())
            }
            HospitalError::SpecializationMismatch { .. } => AppError::ValidationError(err.to_string()),
            HospitalError::IdSpaceExhausted { .. } => AppError::Conflict(err.to_string()),
        }
    }
}
