use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use patient_cell::Patient;

use crate::models::EmergencyEntry;

/// Min-heap of emergency entries. The sequence counter only grows, so
/// entries are never reused or updated.
#[derive(Debug, Default)]
pub struct EmergencyPriorityQueue {
    heap: BinaryHeap<Reverse<EmergencyEntry>>,
    counter: u64,
}

impl EmergencyPriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, patient: &Patient) -> EmergencyEntry {
        let entry = EmergencyEntry {
            priority: patient.priority,
            sequence: self.counter,
            patient_id: patient.id,
        };
        self.counter += 1;
        self.heap.push(Reverse(entry));

        debug!(
            "Patient {} added to emergency list (priority {}, sequence {})",
            entry.patient_id, entry.priority, entry.sequence
        );
        entry
    }

    /// Every entry, most urgent and earliest first. Does not drain the heap.
    pub fn list(&self) -> Vec<EmergencyEntry> {
        let mut entries: Vec<EmergencyEntry> = self.heap.iter().map(|Reverse(entry)| *entry).collect();
        entries.sort();
        entries
    }

    pub fn count(&self) -> usize {
        self.heap.len()
    }
}
