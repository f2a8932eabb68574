use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::{LoginRequest, TokenResponse};
use shared_models::error::AppError;
use shared_utils::jwt::validate_token;

use crate::services::AdminAuthService;

pub async fn admin_login(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    debug!("Admin login request for {}", request.email);

    let response = AdminAuthService::new(&config).login(&request)?;
    Ok(Json(response))
}

pub async fn verify_token(
    State(config): State<Arc<AppConfig>>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<Json<Value>, AppError> {
    debug!("Verifying token");

    let TypedHeader(auth) =
        auth.ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    match validate_token(auth.token(), &config.jwt_secret) {
        Ok(user) => Ok(Json(json!({ "valid": true, "role": user.role }))),
        Err(_) => Ok(Json(json!({ "valid": false }))),
    }
}
