use std::collections::HashMap;

use tracing::{debug, warn};

use doctor_cell::DoctorId;

use crate::models::{Patient, PatientId};
use crate::services::PatientIndex;

/// Patient records keyed by id plus an ordered index for sorted listing.
#[derive(Debug, Default)]
pub struct PatientRegistry {
    patients: HashMap<PatientId, Patient>,
    index: PatientIndex,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `patient`. A duplicate id overwrites the stored record while the
    /// ordered index keeps its existing node; returns whether the index
    /// accepted the id.
    pub fn add(&mut self, patient: Patient) -> bool {
        let id = patient.id;
        debug_assert_eq!(
            self.patients.contains_key(&id),
            self.index.contains(id),
            "patient map and ordered index disagree on id {}",
            id
        );
        if self.patients.insert(id, patient).is_some() {
            warn!("Patient id {} registered twice, previous record replaced", id);
        }

        let indexed = self.index.insert(id);
        if !indexed {
            debug!("Patient id {} already present in ordered index", id);
        }
        indexed
    }

    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(&id)
    }

    pub fn contains(&self, id: PatientId) -> bool {
        self.patients.contains_key(&id)
    }

    /// Records the doctor a patient was booked with.
    pub fn assign_doctor(&mut self, id: PatientId, doctor_id: DoctorId) -> Option<&Patient> {
        let patient = self.patients.get_mut(&id)?;
        patient.doctor_id = Some(doctor_id);
        Some(&*patient)
    }

    /// All patients, ascending by id.
    pub fn all_sorted_by_id(&self) -> Vec<Patient> {
        self.index
            .in_order()
            .into_iter()
            .filter_map(|id| self.patients.get(&id).cloned())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.patients.len()
    }
}
