use actix_web::{web, HttpResponse};

use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::CreateApiKey;
use crate::services::{ApiKeyService, TeamService};

/// GET /api/keys - List the keys for the user's teams
pub async fn list_keys(pool: web::Data<DbPool>, user: AuthenticatedUser) -> AppResult<HttpResponse> {
    let keys = ApiKeyService::list_for_user(pool.get_ref(), user.0.id).await?;

    Ok(HttpResponse::Ok().json(keys))
}

/// POST /api/keys - Generate a key for one of the user's teams
pub async fn create_key(
    pool: web::Data<DbPool>,
    user: AuthenticatedUser,
    body: web::Json<CreateApiKey>,
) -> AppResult<HttpResponse> {
    let user_id = user.0.id;
    let team_id = body.into_inner().team_id;

    let member = TeamService::is_member(pool.get_ref(), user_id, team_id).await?;
    TeamService::require_member(member, team_id)?;

    let key = ApiKeyService::create(pool.get_ref(), user_id, team_id).await?;

    Ok(HttpResponse::Created().json(key))
}

/// Configure API key routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/keys")
            .route("", web::get().to(list_keys))
            .route("", web::post().to(create_key)),
    );
}
