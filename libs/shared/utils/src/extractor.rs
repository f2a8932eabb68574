use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Rejects requests without a valid admin bearer token and stores the
/// authenticated `User` in the request extensions.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(auth) =
        auth.ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let user = validate_token(auth.token(), &config.jwt_secret).map_err(AppError::Auth)?;

    if !user.is_admin() {
        return Err(AppError::Auth("Admin role required".to_string()));
    }

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
