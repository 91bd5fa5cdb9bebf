// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, SignupUserCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

/// # Errors
///
/// Rejects malformed input with 400 and a taken email with 409.
pub async fn signup(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> HttpResult<(StatusCode, Json<SignupResponse>)> {
    let command = SignupUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .signup(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "user created",
            user,
        }),
    ))
}

/// # Errors
///
/// Every credential failure answers 401 with the same message.
pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

/// # Errors
///
/// Store failures surface as 500.
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(Json)
}
