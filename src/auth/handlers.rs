use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn token_pair(keys: &JwtKeys, user: &User) -> Result<AuthResponse, ApiError> {
    let access_token = keys.sign_access(user.id).map_err(|e| {
        error!(error = %e, "jwt sign access failed");
        ApiError::Internal(e)
    })?;
    let refresh_token = keys.sign_refresh(user.id).map_err(|e| {
        error!(error = %e, "jwt sign refresh failed");
        ApiError::Internal(e)
    })?;
    Ok(AuthResponse {
        access_token,
        refresh_token,
        user: PublicUser {
            id: user.id,
            email: user.email.clone(),
        },
    })
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::BadRequest("Password too short".into()));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered"));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.email, &hash).await?;

    let keys = JwtKeys::from_ref(&state);
    let response = token_pair(&keys, &user)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(response))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email".into()));
    }

    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::Unauthorized("Invalid credentials"));
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials"));
    }

    let keys = JwtKeys::from_ref(&state);
    let response = token_pair(&keys, &user)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(response))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|_| ApiError::Unauthorized("Invalid refresh token"))?;

    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or(ApiError::Unauthorized("User not found"))?;

    let response = token_pair(&keys, &user)?;
    Ok(Json(response))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user_id, "user not found");
            ApiError::Unauthorized("User not found")
        })?;

    Ok(Json(PublicUser {
        id: user.id,
        email: user.email,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_regex_accepts_and_rejects() {
        assert!(is_valid_email("someone@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn public_user_serialization() {
        let response = PublicUser {
            id: uuid::Uuid::new_v4(),
            email: "test@example.com".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(json.contains("id"));
    }
}
