use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{AuthClaims, generate_jwt},
    db::user::{create_user, email_exists, get_credentials_by_email},
    errors::AppError,
    models::{User, UserRole},
    state::AppState,
    validate,
};

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub is_representative: bool,
    pub exam_score: Option<i32>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub users_id: i32,
    pub email: String,
    pub full_name: String,
    pub user_type: UserRole,
    pub exam_score: Option<i32>,
}

impl AuthResponse {
    fn new(token: String, user: User) -> Self {
        Self {
            token,
            users_id: user.users_id,
            email: user.email,
            full_name: user.full_name,
            user_type: user.user_type,
            exam_score: user.exam_score,
        }
    }
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    // same message for unknown email and wrong password
    let invalid = || AppError::Unauthorized("Invalid email or password".into());

    let credentials = get_credentials_by_email(&payload.email, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error during login lookup: {}", e);
            e
        })?
        .ok_or_else(invalid)?;

    let valid = bcrypt::verify(&payload.password, &credentials.password).map_err(|e| {
        tracing::error!("Error verifying password: {}", e);
        AppError::HashError(e)
    })?;

    if !valid {
        return Err(invalid());
    }

    let user = User {
        users_id: credentials.users_id,
        email: credentials.email,
        full_name: credentials.full_name,
        user_type: credentials.user_type,
        exam_score: credentials.exam_score,
    };

    let token = generate_jwt(&user)?;

    tracing::info!("User {} logged in", user.email);

    Ok(Json(AuthResponse::new(token, user)))
}

pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validate_registration(&payload)?;

    let taken = email_exists(&payload.email, state.postgres.clone()).await?;
    if taken {
        return Err(AppError::BadRequest(
            "A user with this email already exists".into(),
        ));
    }

    let hashed = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;

    let user_type = if payload.is_representative {
        UserRole::UniversityRepresentative
    } else {
        UserRole::Student
    };

    let user = create_user(
        payload.email,
        hashed,
        payload.full_name,
        user_type,
        payload.exam_score,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating user: {}", e);
        e
    })?;

    let token = generate_jwt(&user)?;

    Ok((StatusCode::CREATED, Json(AuthResponse::new(token, user))))
}

fn validate_registration(payload: &RegisterPayload) -> Result<(), AppError> {
    if payload.email.trim().is_empty()
        || payload.password.is_empty()
        || payload.full_name.trim().is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".into()));
    }
    if payload.password.len() < validate::PASSWORD_MIN_LENGTH {
        return Err(AppError::BadRequest(
            "Password must contain at least 6 characters".into(),
        ));
    }
    if !validate::is_valid_email(&payload.email) {
        return Err(AppError::BadRequest("Invalid email format".into()));
    }
    if let Some(score) = payload.exam_score {
        if score < 0 {
            return Err(AppError::BadRequest("Invalid exam score".into()));
        }
    }
    Ok(())
}

#[derive(Serialize)]
pub struct MeResponse {
    pub users_id: i32,
    pub email: String,
    pub full_name: String,
    pub user_type: UserRole,
}

pub async fn me_handler(claims: AuthClaims) -> Result<Json<MeResponse>, AppError> {
    let users_id = claims.user_id()?;

    Ok(Json(MeResponse {
        users_id,
        email: claims.0.email,
        full_name: claims.0.full_name,
        user_type: claims.0.user_type,
    }))
}

pub async fn logout_handler(_claims: AuthClaims) -> Result<Json<serde_json::Value>, AppError> {
    // JWTs are stateless; the client drops the token
    Ok(Json(serde_json::json!({ "message": "Logged out" })))
}
