use serde::Serialize;

use appointment_cell::Appointment;
use billing_cell::BillView;
use doctor_cell::{Doctor, Specialization};
use patient_cell::{Patient, PatientId};

use crate::error::HospitalError;

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub patient_id: PatientId,
    pub specialization: Specialization,
    pub doctors: Vec<Doctor>,
}

/// Success flag plus a human-readable message for a booking attempt.
#[derive(Debug, Clone, Serialize)]
pub struct BookingOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,
}

impl From<Result<Appointment, HospitalError>> for BookingOutcome {
    fn from(result: Result<Appointment, HospitalError>) -> Self {
        match result {
            Ok(appointment) => Self {
                success: true,
                message: "Appointment booked successfully!".to_string(),
                appointment: Some(appointment),
            },
            Err(err) => Self {
                success: false,
                message: err.to_string(),
                appointment: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub patients: usize,
    pub appointments: usize,
    pub doctors: usize,
    pub emergency: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseMapping {
    pub disease: &'static str,
    pub specialization: Specialization,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub viewer: String,
    pub stats: DashboardStats,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub emergency: Vec<Patient>,
    pub bills: Vec<BillView>,
    pub doctors: Vec<Doctor>,
}
