use axum::Router;

use auth_cell::auth_routes;
use hospital_cell::{hospital_routes, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/auth", auth_routes(state.config.clone()))
        .merge(hospital_routes(state))
}
