use doctor_cell::Specialization;

/// Disease label to the department that treats it. Anything not listed goes
/// to General Medicine.
pub const DISEASE_SPECIALIST: [(&str, Specialization); 12] = [
    ("Heart Pain", Specialization::Cardiology),
    ("Chest Pain", Specialization::Cardiology),
    ("Brain Tumor", Specialization::Neurology),
    ("Headache", Specialization::Neurology),
    ("Skin Infection", Specialization::Dermatology),
    ("Bone Fracture", Specialization::Orthopedics),
    ("Child Fever", Specialization::Pediatrics),
    ("Depression", Specialization::Psychiatry),
    ("Cancer", Specialization::Oncology),
    ("Stomach Pain", Specialization::Gastroenterology),
    ("Urine Problem", Specialization::Urology),
    ("ENT Infection", Specialization::Ent),
];

/// Exact, case-sensitive lookup.
pub fn specialist_for(disease: &str) -> Specialization {
    DISEASE_SPECIALIST
        .iter()
        .find(|(name, _)| *name == disease)
        .map(|(_, spec)| *spec)
        .unwrap_or(Specialization::GeneralMedicine)
}
