//! Unit tests for the team membership guard
//!
//! Key creation and team file listing both apply this decision after the
//! membership lookup; non-members must be rejected with a Forbidden response.

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use meterdash::services::TeamService;
use uuid::Uuid;

#[test]
fn test_member_passes_the_guard() {
    assert!(TeamService::require_member(true, Uuid::new_v4()).is_ok());
}

#[test]
fn test_non_member_is_forbidden() {
    let team_id = Uuid::new_v4();
    let err = TeamService::require_member(false, team_id).unwrap_err();

    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    // The message names the team so the frontend can surface it
    assert!(err.to_string().contains(&team_id.to_string()));
}

#[test]
fn test_forbidden_response_status() {
    let err = TeamService::require_member(false, Uuid::new_v4()).unwrap_err();
    let resp = err.error_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
