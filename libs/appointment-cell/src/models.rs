// libs/appointment-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doctor_cell::DoctorId;
use patient_cell::PatientId;

pub type AppointmentId = u32;

/// Requested time used when the caller leaves the time blank.
pub const ASAP: &str = "ASAP";

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked visit. Names are snapshots taken at booking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: AppointmentId,
    pub patient_id: PatientId,
    pub patient_name: String,
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub time: Option<String>,
}

impl BookAppointmentRequest {
    /// The requested time, or `ASAP` when missing or blank.
    pub fn requested_time(&self) -> String {
        match self.time.as_deref().map(str::trim) {
            Some(time) if !time.is_empty() => time.to_string(),
            _ => ASAP.to_string(),
        }
    }
}
