use crate::models::BillEntry;

/// Billing entries kept as a stack; listing shows the newest first.
#[derive(Debug, Default)]
pub struct BillingLedger {
    entries: Vec<BillEntry>,
}

impl BillingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: BillEntry) {
        self.entries.push(entry);
    }

    /// Snapshot, most recently pushed first.
    pub fn all(&self) -> Vec<BillEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
