use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::state::AppState;

pub fn hospital_routes(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::health))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/diseases", get(handlers::list_diseases))
        .route("/doctors", get(handlers::list_doctors))
        .route("/patients", post(handlers::register_patient))
        .route("/patients/{patient_id}", get(handlers::get_patient))
        .route(
            "/appointments",
            get(handlers::list_appointments).post(handlers::book_appointment),
        )
        .route("/appointments/next", post(handlers::next_appointment))
        .route("/emergency", get(handlers::emergency_list))
        .route("/billing", get(handlers::list_bills).post(handlers::add_bill));

    let admin_routes = Router::new()
        .route("/admin/dashboard", get(handlers::admin_dashboard))
        .layer(middleware::from_fn_with_state(state.config.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state)
}
