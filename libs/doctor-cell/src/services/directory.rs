use std::collections::HashMap;

use tracing::debug;

use crate::models::{Doctor, DoctorId, Specialization};

/// Doctors keyed by id.
#[derive(Debug, Default)]
pub struct DoctorDirectory {
    doctors: HashMap<DoctorId, Doctor>,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a doctor, overwriting any existing record with the same id.
    pub fn add(&mut self, id: DoctorId, name: impl Into<String>, specialization: Specialization) {
        let doctor = Doctor::new(id, name, specialization);
        if self.doctors.insert(id, doctor).is_some() {
            debug!("Doctor {} overwritten", id);
        }
    }

    pub fn get(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.get(&id)
    }

    /// All doctors, or only those with exactly `specialization`. Order is
    /// ascending by id.
    pub fn filter(&self, specialization: Option<Specialization>) -> Vec<Doctor> {
        let mut doctors: Vec<Doctor> = self
            .doctors
            .values()
            .filter(|doctor| specialization.map_or(true, |spec| doctor.specialization == spec))
            .cloned()
            .collect();
        doctors.sort_by_key(|doctor| doctor.id);
        doctors
    }

    pub fn count(&self) -> usize {
        self.doctors.len()
    }
}
