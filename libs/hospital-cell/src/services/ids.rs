use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
use mockall::automock;

use appointment_cell::AppointmentId;
use patient_cell::PatientId;

pub const PATIENT_ID_RANGE: std::ops::RangeInclusive<PatientId> = 10000..=99999;
pub const APPOINTMENT_ID_RANGE: std::ops::RangeInclusive<AppointmentId> = 1111..=9999;

/// Source of identifiers for new patients and appointments.
#[cfg_attr(test, automock)]
pub trait IdSource {
    fn patient_id(&mut self) -> PatientId;
    fn appointment_id(&mut self) -> AppointmentId;
}

/// Uniform random ids from the fixed ranges.
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIds {
    fn patient_id(&mut self) -> PatientId {
        self.rng.gen_range(PATIENT_ID_RANGE)
    }

    fn appointment_id(&mut self) -> AppointmentId {
        self.rng.gen_range(APPOINTMENT_ID_RANGE)
    }
}
