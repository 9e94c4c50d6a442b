use actix_session::Session;
use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use std::pin::Pin;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Profile;
use crate::services::ProfileService;

/// Session key written by the identity service that shares the cookie key
const SESSION_USER_ID_KEY: &str = "user_id";

/// Get user ID from session
pub fn get_user_id_from_session(session: &Session) -> Option<Uuid> {
    session.get::<Uuid>(SESSION_USER_ID_KEY).ok().flatten()
}

/// Middleware extractor for the authenticated user's profile (session-based)
pub struct AuthenticatedUser(pub Profile);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            // Extract session
            let session = Session::extract(&req)
                .await
                .map_err(|_| AppError::Unauthorized("Session error".to_string()))?;

            // Get user ID from session
            let user_id = get_user_id_from_session(&session)
                .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

            // Get database pool
            let pool = req
                .app_data::<web::Data<sqlx::PgPool>>()
                .ok_or_else(|| AppError::Internal("Database pool not found".to_string()))?;

            // Fetch profile from database
            let profile = ProfileService::get_for_user(pool.get_ref(), user_id)
                .await
                .map_err(|e| AppError::Internal(format!("Failed to fetch profile: {}", e)))?
                .ok_or_else(|| AppError::Unauthorized("Profile not found".to_string()))?;

            Ok(AuthenticatedUser(profile))
        })
    }
}

/// Lighter extractor: just the session's user ID, no profile lookup.
///
/// The dashboard uses this so a signed-in user whose profile row does not
/// exist yet is routed to onboarding instead of rejected with 401.
pub struct SessionUser(pub Uuid);

impl FromRequest for SessionUser {
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let session = Session::extract(&req)
                .await
                .map_err(|_| AppError::Unauthorized("Session error".to_string()))?;

            let user_id = get_user_id_from_session(&session)
                .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

            Ok(SessionUser(user_id))
        })
    }
}
