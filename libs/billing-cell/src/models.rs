use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use patient_cell::PatientId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillEntry {
    pub recorded_at: DateTime<Utc>,
    pub patient_id: PatientId,
    pub patient_name: String,
    pub amount: f64,
}

impl BillEntry {
    pub fn new(patient_id: PatientId, patient_name: impl Into<String>, amount: f64) -> Self {
        Self {
            recorded_at: Utc::now(),
            patient_id,
            patient_name: patient_name.into(),
            amount,
        }
    }

    /// Ledger line, e.g. `2024-05-01 09:30 • Ali Khan (ID: 15000) — Rs1,500.50`.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BillEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} • {} (ID: {}) — Rs{}",
            self.recorded_at.format("%Y-%m-%d %H:%M"),
            self.patient_name,
            self.patient_id,
            format_amount(self.amount),
        )
    }
}

/// Two decimals with comma thousands separators.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddBillRequest {
    pub patient_id: PatientId,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillView {
    #[serde(flatten)]
    pub entry: BillEntry,
    pub summary: String,
}

impl From<BillEntry> for BillView {
    fn from(entry: BillEntry) -> Self {
        let summary = entry.summary();
        Self { entry, summary }
    }
}
