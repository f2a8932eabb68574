use rand::Rng;
use tracing::{debug, info, warn};

use appointment_cell::{Appointment, AppointmentQueue};
use billing_cell::{BillEntry, BillingLedger};
use doctor_cell::{generate_doctors, Doctor, DoctorDirectory, DoctorId, Specialization};
use emergency_cell::EmergencyPriorityQueue;
use patient_cell::{Patient, PatientId, PatientRegistry};
use shared_config::AppConfig;

use crate::error::HospitalError;
use crate::models::{DashboardStats, Registration};
use crate::services::ids::{IdSource, RandomIds};
use crate::services::specialist::specialist_for;

/// Upper bound on redraws when a random patient id is already taken.
const MAX_ID_ATTEMPTS: u32 = 64;

/// Front-desk operations over the in-memory stores.
///
/// Not synchronized; callers serving concurrent requests wrap it in a lock
/// (see `AppState`).
pub struct HospitalService {
    doctors: DoctorDirectory,
    patients: PatientRegistry,
    appointments: AppointmentQueue,
    billing: BillingLedger,
    emergency: EmergencyPriorityQueue,
    ids: Box<dyn IdSource + Send + Sync>,
}

impl HospitalService {
    pub fn new(ids: Box<dyn IdSource + Send + Sync>) -> Self {
        Self {
            doctors: DoctorDirectory::new(),
            patients: PatientRegistry::new(),
            appointments: AppointmentQueue::new(),
            billing: BillingLedger::new(),
            emergency: EmergencyPriorityQueue::new(),
            ids,
        }
    }

    /// Service with random ids and a generated doctor roster sized by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut service = Self::new(Box::new(RandomIds::new()));
        service.generate_doctors(config.doctor_count, config.doctor_start_id, &mut rand::thread_rng());
        service
    }

    pub fn generate_doctors<R: Rng + ?Sized>(&mut self, count: u32, start_id: DoctorId, rng: &mut R) {
        generate_doctors(&mut self.doctors, count, start_id, rng);
    }

    pub fn add_doctor(&mut self, id: DoctorId, name: impl Into<String>, specialization: Specialization) {
        self.doctors.add(id, name, specialization);
    }

    pub fn specialist_for(&self, disease: &str) -> Specialization {
        specialist_for(disease)
    }

    /// Registers a patient and suggests doctors of the matching specialization.
    pub fn register_patient(
        &mut self,
        name: &str,
        age: u32,
        disease: &str,
        priority: i32,
        emergency: bool,
    ) -> Result<Registration, HospitalError> {
        let specialization = specialist_for(disease);
        let patient_id = self.draw_patient_id()?;

        let patient = Patient {
            id: patient_id,
            name: name.to_string(),
            age,
            disease: disease.to_string(),
            priority,
            emergency,
            specialization,
            created_at: chrono::Utc::now(),
            doctor_id: None,
        };

        if patient.needs_emergency_care() {
            self.emergency.add(&patient);
        }
        self.patients.add(patient);

        info!(
            "Registered patient {} for {} (priority {}, emergency {})",
            patient_id, specialization, priority, emergency
        );

        Ok(Registration {
            patient_id,
            specialization,
            doctors: self.doctors.filter(Some(specialization)),
        })
    }

    fn draw_patient_id(&mut self) -> Result<PatientId, HospitalError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.patient_id();
            if !self.patients.contains(candidate) {
                return Ok(candidate);
            }
            debug!("Patient id {} already taken, drawing again", candidate);
        }

        warn!("Could not draw a free patient id after {} attempts", MAX_ID_ATTEMPTS);
        Err(HospitalError::IdSpaceExhausted { attempts: MAX_ID_ATTEMPTS })
    }

    /// Books `patient_id` with `doctor_id` when their specializations match.
    /// On success the appointment joins the tail of the queue and the patient
    /// record remembers the doctor.
    pub fn book_appointment(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        time: &str,
    ) -> Result<Appointment, HospitalError> {
        let patient = self.patients.get(patient_id).ok_or(HospitalError::PatientNotFound)?;
        let doctor = self.doctors.get(doctor_id).ok_or(HospitalError::DoctorNotFound)?;

        if patient.specialization != doctor.specialization {
            warn!(
                "Rejected booking of patient {} with doctor {}: needs {}, doctor is {}",
                patient_id, doctor_id, patient.specialization, doctor.specialization
            );
            return Err(HospitalError::SpecializationMismatch {
                required: patient.specialization,
            });
        }

        let appointment = Appointment {
            appointment_id: self.ids.appointment_id(),
            patient_id,
            patient_name: patient.name.clone(),
            doctor_id,
            doctor_name: doctor.name.clone(),
            time: time.to_string(),
            created_at: chrono::Utc::now(),
        };

        self.appointments.enqueue(appointment.clone());
        self.patients.assign_doctor(patient_id, doctor_id);

        info!(
            "Booked appointment {} for patient {} with doctor {} at {}",
            appointment.appointment_id, patient_id, doctor_id, appointment.time
        );
        Ok(appointment)
    }

    /// Serves the oldest appointment in the queue.
    pub fn next_appointment(&mut self) -> Option<Appointment> {
        let appointment = self.appointments.dequeue();
        if let Some(appointment) = &appointment {
            info!("Dequeued appointment {}", appointment.appointment_id);
        }
        appointment
    }

    pub fn add_bill(&mut self, patient_id: PatientId, amount: f64) -> Result<BillEntry, HospitalError> {
        let patient = self.patients.get(patient_id).ok_or(HospitalError::PatientNotFound)?;

        let entry = BillEntry::new(patient_id, patient.name.clone(), amount);
        self.billing.push(entry.clone());

        info!("Billed patient {}: {}", patient_id, amount);
        Ok(entry)
    }

    pub fn patient(&self, patient_id: PatientId) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    pub fn all_patients_sorted(&self) -> Vec<Patient> {
        self.patients.all_sorted_by_id()
    }

    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments.all()
    }

    /// Emergency patients, most urgent first, resolved to their current records.
    pub fn emergency_list(&self) -> Vec<Patient> {
        self.emergency
            .list()
            .into_iter()
            .filter_map(|entry| self.patients.get(entry.patient_id).cloned())
            .collect()
    }

    pub fn bills(&self) -> Vec<BillEntry> {
        self.billing.all()
    }

    pub fn doctors_filtered(&self, specialization: Option<Specialization>) -> Vec<Doctor> {
        self.doctors.filter(specialization)
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            patients: self.patients.count(),
            appointments: self.appointments.count(),
            doctors: self.doctors.count(),
            emergency: self.emergency.count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ids::MockIdSource;
    use assert_matches::assert_matches;
    use std::collections::VecDeque;

    fn mock_ids(patient_ids: Vec<PatientId>) -> MockIdSource {
        let mut queue: VecDeque<PatientId> = patient_ids.into();
        let mut ids = MockIdSource::new();
        ids.expect_patient_id()
            .returning(move || queue.pop_front().expect("test ran out of patient ids"));
        ids.expect_appointment_id().return_const(4242u32);
        ids
    }

    fn service_with(patient_ids: Vec<PatientId>) -> HospitalService {
        let mut service = HospitalService::new(Box::new(mock_ids(patient_ids)));
        service.add_doctor(2001, "Dr. Ayesha Khan", Specialization::Cardiology);
        service.add_doctor(2002, "Dr. Bilal Shah", Specialization::Neurology);
        service.add_doctor(2003, "Dr. Sana Malik", Specialization::Cardiology);
        service.add_doctor(2004, "Dr. Raza Butt", Specialization::GeneralMedicine);
        service
    }

    #[test]
    fn test_register_resolves_specialization_and_suggests_doctors() {
        let mut service = service_with(vec![15000]);

        let registration = service.register_patient("Ali", 52, "Chest Pain", 5, false).unwrap();

        assert_eq!(registration.patient_id, 15000);
        assert_eq!(registration.specialization, Specialization::Cardiology);
        let suggested: Vec<DoctorId> = registration.doctors.iter().map(|d| d.id).collect();
        assert_eq!(suggested, vec![2001, 2003]);

        let patient = service.patient(15000).unwrap();
        assert_eq!(patient.name, "Ali");
        assert_eq!(patient.doctor_id, None);
    }

    #[test]
    fn test_unmapped_disease_goes_to_general_medicine() {
        let mut service = service_with(vec![15000]);

        let registration = service.register_patient("Hira", 30, "Flu", 5, false).unwrap();

        assert_eq!(registration.specialization, Specialization::GeneralMedicine);
        assert_eq!(registration.doctors.len(), 1);
        assert_eq!(service.specialist_for("Flu"), Specialization::GeneralMedicine);
    }

    #[test]
    fn test_emergency_membership() {
        let mut service = service_with(vec![11000, 12000, 13000]);

        service.register_patient("Low", 30, "Headache", 2, false).unwrap();
        service.register_patient("Routine", 30, "Headache", 8, false).unwrap();
        service.register_patient("Flagged", 30, "Headache", 8, true).unwrap();

        let ids: Vec<PatientId> = service.emergency_list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![11000, 13000]);
        assert_eq!(service.stats().emergency, 2);
    }

    #[test]
    fn test_emergency_order_priority_then_registration() {
        let mut service = service_with(vec![10001, 10002, 10003]);

        service.register_patient("P1", 40, "Cancer", 3, false).unwrap();
        service.register_patient("P2", 40, "Cancer", 1, false).unwrap();
        service.register_patient("P3", 40, "Cancer", 3, false).unwrap();

        let names: Vec<String> = service.emergency_list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn test_sorted_patients_regardless_of_registration_order() {
        let mut service = service_with(vec![15000, 12000, 18000]);

        service.register_patient("A", 20, "Headache", 5, false).unwrap();
        service.register_patient("B", 20, "Headache", 5, false).unwrap();
        service.register_patient("C", 20, "Headache", 5, false).unwrap();

        let ids: Vec<PatientId> = service.all_patients_sorted().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![12000, 15000, 18000]);
    }

    #[test]
    fn test_colliding_patient_id_is_redrawn() {
        let mut service = service_with(vec![15000, 15000, 16000]);

        service.register_patient("First", 20, "Headache", 5, false).unwrap();
        let second = service.register_patient("Second", 20, "Headache", 5, false).unwrap();

        assert_eq!(second.patient_id, 16000);
        assert_eq!(service.patient(15000).unwrap().name, "First");
        assert_eq!(service.stats().patients, 2);
    }

    #[test]
    fn test_id_space_exhausted() {
        let mut ids = MockIdSource::new();
        ids.expect_patient_id().return_const(15000u32);
        let mut service = HospitalService::new(Box::new(ids));

        service.register_patient("First", 20, "Headache", 5, false).unwrap();
        let err = service.register_patient("Second", 20, "Headache", 5, false).unwrap_err();

        assert_matches!(err, HospitalError::IdSpaceExhausted { attempts } if attempts == MAX_ID_ATTEMPTS);
        assert_eq!(service.stats().patients, 1);
    }

    #[test]
    fn test_book_appointment_success_appends_and_assigns_doctor() {
        let mut service = service_with(vec![15000, 16000]);
        service.register_patient("Ali", 52, "Heart Pain", 5, false).unwrap();
        service.register_patient("Zara", 33, "Chest Pain", 5, false).unwrap();

        service.book_appointment(15000, 2001, "ASAP").unwrap();
        let appointment = service.book_appointment(16000, 2003, "Tuesday 11:00").unwrap();

        assert_eq!(appointment.appointment_id, 4242);
        assert_eq!(appointment.patient_name, "Zara");
        assert_eq!(appointment.doctor_name, "Dr. Sana Malik");
        assert_eq!(appointment.time, "Tuesday 11:00");

        let listed = service.list_appointments();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.last().unwrap(), &appointment);
        assert_eq!(service.patient(16000).unwrap().doctor_id, Some(2003));
    }

    #[test]
    fn test_book_appointment_failures() {
        let mut service = service_with(vec![15000]);
        service.register_patient("Ali", 52, "Heart Pain", 5, false).unwrap();

        assert_eq!(
            service.book_appointment(99999, 2001, "ASAP").unwrap_err(),
            HospitalError::PatientNotFound
        );
        assert_eq!(
            service.book_appointment(15000, 9999, "ASAP").unwrap_err(),
            HospitalError::DoctorNotFound
        );

        let mismatch = service.book_appointment(15000, 2002, "ASAP").unwrap_err();
        assert_eq!(mismatch.to_string(), "Wrong doctor selected! Patient needs Cardiology");

        assert!(service.list_appointments().is_empty());
        assert_eq!(service.patient(15000).unwrap().doctor_id, None);
    }

    #[test]
    fn test_next_appointment_serves_oldest() {
        let mut service = service_with(vec![15000]);
        service.register_patient("Ali", 52, "Heart Pain", 5, false).unwrap();
        service.book_appointment(15000, 2001, "first").unwrap();
        service.book_appointment(15000, 2003, "second").unwrap();

        assert_eq!(service.next_appointment().unwrap().time, "first");
        assert_eq!(service.next_appointment().unwrap().time, "second");
        assert!(service.next_appointment().is_none());
    }

    #[test]
    fn test_add_bill() {
        let mut service = service_with(vec![15000]);
        service.register_patient("Ali", 52, "Heart Pain", 5, false).unwrap();

        service.add_bill(15000, 200.0).unwrap();
        let entry = service.add_bill(15000, 1500.50).unwrap();

        let bills = service.bills();
        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0], entry);
        assert!(entry.summary().ends_with("Ali (ID: 15000) — Rs1,500.50"));
    }

    #[test]
    fn test_add_bill_unknown_patient_leaves_ledger_unchanged() {
        let mut service = service_with(vec![]);

        assert!(service.add_bill(12345, 100.0).is_err());
        assert!(service.bills().is_empty());
    }

    #[test]
    fn test_stats_and_doctor_filter() {
        let mut service = service_with(vec![15000]);
        service.register_patient("Ali", 52, "Heart Pain", 1, false).unwrap();
        service.book_appointment(15000, 2001, "ASAP").unwrap();

        assert_eq!(
            service.stats(),
            DashboardStats { patients: 1, appointments: 1, doctors: 4, emergency: 1 }
        );
        assert_eq!(service.doctors_filtered(None).len(), 4);
        assert_eq!(service.doctors_filtered(Some(Specialization::Neurology)).len(), 1);
    }

    #[test]
    fn test_from_config_generates_roster() {
        let config = AppConfig {
            doctor_count: 12,
            doctor_start_id: 3000,
            ..AppConfig::default()
        };
        let service = HospitalService::from_config(&config);

        assert_eq!(service.stats().doctors, 12);
        assert!(service.doctors_filtered(None).iter().all(|d| (3001..=3012).contains(&d.id)));
    }

    #[test]
    fn test_from_config_roster_near_id_limit() {
        let config = AppConfig {
            doctor_count: 10,
            doctor_start_id: u32::MAX - 3,
            ..AppConfig::default()
        };
        let service = HospitalService::from_config(&config);

        assert_eq!(service.stats().doctors, 3);
    }
}
