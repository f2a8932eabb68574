use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use appointment_cell::{Appointment, BookAppointmentRequest};
use billing_cell::{AddBillRequest, BillView};
use doctor_cell::{Doctor, DoctorFilter};
use patient_cell::{Patient, PatientId, RegisterPatientRequest};
use shared_models::{auth::User, error::AppError};

use crate::models::{AdminDashboard, BookingOutcome, DashboardStats, DiseaseMapping, Registration};
use crate::services::DISEASE_SPECIALIST;
use crate::state::AppState;

pub async fn health() -> &'static str {
    "Hospital front desk API is running!"
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(state.hospital.read().await.stats())
}

pub async fn list_diseases() -> Json<Vec<DiseaseMapping>> {
    Json(
        DISEASE_SPECIALIST
            .iter()
            .map(|(disease, specialization)| DiseaseMapping {
                disease: *disease,
                specialization: *specialization,
            })
            .collect(),
    )
}

pub async fn list_doctors(
    State(state): State<AppState>,
    Query(filter): Query<DoctorFilter>,
) -> Json<Vec<Doctor>> {
    debug!("Listing doctors with filter: {:?}", filter);
    Json(state.hospital.read().await.doctors_filtered(filter.specialization))
}

pub async fn register_patient(
    State(state): State<AppState>,
    Json(request): Json<RegisterPatientRequest>,
) -> Result<(StatusCode, Json<Registration>), AppError> {
    let name = request.name.trim();
    let disease = request.disease.trim();
    if name.is_empty() || disease.is_empty() {
        return Err(AppError::ValidationError("Please fill all required fields.".to_string()));
    }
    let age = u32::try_from(request.age)
        .map_err(|_| AppError::ValidationError("Age must be a valid number.".to_string()))?;

    let registration = state
        .hospital
        .write()
        .await
        .register_patient(name, age, disease, request.priority, request.emergency)?;

    Ok((StatusCode::CREATED, Json(registration)))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<PatientId>,
) -> Result<Json<Patient>, AppError> {
    state
        .hospital
        .read()
        .await
        .patient(patient_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))
}

pub async fn book_appointment(
    State(state): State<AppState>,
    Json(request): Json<BookAppointmentRequest>,
) -> (StatusCode, Json<BookingOutcome>) {
    let time = request.requested_time();
    let result = state
        .hospital
        .write()
        .await
        .book_appointment(request.patient_id, request.doctor_id, &time);

    let status = match &result {
        Ok(_) => StatusCode::CREATED,
        Err(err) => AppError::from(err.clone()).status(),
    };

    (status, Json(BookingOutcome::from(result)))
}

pub async fn list_appointments(State(state): State<AppState>) -> Json<Vec<Appointment>> {
    Json(state.hospital.read().await.list_appointments())
}

pub async fn next_appointment(State(state): State<AppState>) -> Result<Json<Appointment>, AppError> {
    state
        .hospital
        .write()
        .await
        .next_appointment()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No appointments waiting".to_string()))
}

pub async fn emergency_list(State(state): State<AppState>) -> Json<Vec<Patient>> {
    Json(state.hospital.read().await.emergency_list())
}

pub async fn add_bill(
    State(state): State<AppState>,
    Json(request): Json<AddBillRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if !request.amount.is_finite() || request.amount < 0.0 {
        return Err(AppError::ValidationError("Invalid Patient ID or Bill Amount.".to_string()));
    }

    let entry = state
        .hospital
        .write()
        .await
        .add_bill(request.patient_id, request.amount)
        .map_err(|_| {
            AppError::NotFound(format!("Patient ID {} not found in the system.", request.patient_id))
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "bill": BillView::from(entry),
        })),
    ))
}

pub async fn list_bills(State(state): State<AppState>) -> Json<Vec<BillView>> {
    Json(
        state
            .hospital
            .read()
            .await
            .bills()
            .into_iter()
            .map(BillView::from)
            .collect(),
    )
}

pub async fn admin_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Json<AdminDashboard> {
    info!("Admin dashboard requested by {}", user.id);

    let hospital = state.hospital.read().await;
    Json(AdminDashboard {
        viewer: user.id,
        stats: hospital.stats(),
        patients: hospital.all_patients_sorted(),
        appointments: hospital.list_appointments(),
        emergency: hospital.emergency_list(),
        bills: hospital.bills().into_iter().map(BillView::from).collect(),
        doctors: hospital.doctors_filtered(None),
    })
}
