use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doctor_cell::{DoctorId, Specialization};

pub type PatientId = u32;

pub const DEFAULT_PRIORITY: i32 = 5;

/// Patients at or below this priority are treated as emergencies even
/// without the explicit flag.
pub const EMERGENCY_PRIORITY_THRESHOLD: i32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub disease: String,
    /// Lower is more urgent.
    pub priority: i32,
    pub emergency: bool,
    pub specialization: Specialization,
    pub created_at: DateTime<Utc>,
    pub doctor_id: Option<DoctorId>,
}

impl Patient {
    pub fn needs_emergency_care(&self) -> bool {
        self.emergency || self.priority <= EMERGENCY_PRIORITY_THRESHOLD
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPatientRequest {
    pub name: String,
    pub age: i64,
    pub disease: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub emergency: bool,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}
