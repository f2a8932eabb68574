use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use patient_cell::PatientId;

/// A patient waiting for emergency care.
///
/// Entries order by `(priority, sequence)`: lower priority values are more
/// urgent and equal priorities keep arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyEntry {
    pub priority: i32,
    pub sequence: u64,
    pub patient_id: PatientId,
}

impl Ord for EmergencyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for EmergencyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let urgent = EmergencyEntry { priority: 1, sequence: 5, patient_id: 1 };
        let early = EmergencyEntry { priority: 3, sequence: 0, patient_id: 2 };
        let late = EmergencyEntry { priority: 3, sequence: 2, patient_id: 3 };

        assert!(urgent < early);
        assert!(early < late);
    }
}
