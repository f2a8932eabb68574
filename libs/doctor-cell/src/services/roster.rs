use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::models::{DoctorId, Specialization};
use crate::services::DoctorDirectory;

const FIRST_NAMES: [&str; 8] = ["Ayesha", "Bilal", "Ali", "Sana", "Raza", "Fatima", "Hira", "Zara"];
const LAST_NAMES: [&str; 6] = ["Khan", "Shah", "Malik", "Rizvi", "Butt", "Mirza"];

/// Fills `directory` with `count` random doctors numbered `start_id + 1`
/// through `start_id + count`. Generation stops early at the top of the id
/// range; the number of doctors actually added is returned.
pub fn generate_doctors<R: Rng + ?Sized>(
    directory: &mut DoctorDirectory,
    count: u32,
    start_id: DoctorId,
    rng: &mut R,
) -> u32 {
    let mut generated = 0;

    for offset in 1..=count {
        let Some(id) = start_id.checked_add(offset) else {
            warn!(
                "Doctor id range exhausted after {} of {} doctors (start id {})",
                generated, count, start_id
            );
            break;
        };

        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ali");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("Khan");
        let specialization = Specialization::ALL
            .choose(rng)
            .copied()
            .unwrap_or(Specialization::GeneralMedicine);

        directory.add(id, format!("Dr. {} {}", first, last), specialization);
        generated += 1;
    }

    info!("Generated {} doctors after id {}", generated, start_id);
    generated
}
