use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type DoctorId = u32;

/// Medical department used to match patients with doctors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Specialization {
    Cardiology,
    Neurology,
    Orthopedics,
    Dermatology,
    #[serde(rename = "ENT")]
    Ent,
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
    Pediatrics,
    Oncology,
    Psychiatry,
    Urology,
    Gastroenterology,
}

impl Specialization {
    pub const ALL: [Specialization; 11] = [
        Specialization::Cardiology,
        Specialization::Neurology,
        Specialization::Orthopedics,
        Specialization::Dermatology,
        Specialization::Ent,
        Specialization::GeneralMedicine,
        Specialization::Pediatrics,
        Specialization::Oncology,
        Specialization::Psychiatry,
        Specialization::Urology,
        Specialization::Gastroenterology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::Cardiology => "Cardiology",
            Specialization::Neurology => "Neurology",
            Specialization::Orthopedics => "Orthopedics",
            Specialization::Dermatology => "Dermatology",
            Specialization::Ent => "ENT",
            Specialization::GeneralMedicine => "General Medicine",
            Specialization::Pediatrics => "Pediatrics",
            Specialization::Oncology => "Oncology",
            Specialization::Psychiatry => "Psychiatry",
            Specialization::Urology => "Urology",
            Specialization::Gastroenterology => "Gastroenterology",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialization {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Specialization::ALL
            .iter()
            .copied()
            .find(|spec| spec.as_str() == value)
            .ok_or_else(|| format!("Unknown specialization: '{}'", value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialization: Specialization,
}

impl Doctor {
    pub fn new(id: DoctorId, name: impl Into<String>, specialization: Specialization) -> Self {
        Self {
            id,
            name: name.into(),
            specialization,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorFilter {
    pub specialization: Option<Specialization>,
}
