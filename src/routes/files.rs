use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::services::{FileService, TeamService};

/// GET /api/teams/{team_id}/files - List a team's uploaded files
pub async fn list_files(
    pool: web::Data<DbPool>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let team_id = path.into_inner();

    let member = TeamService::is_member(pool.get_ref(), user.0.id, team_id).await?;
    TeamService::require_member(member, team_id)?;

    let files = FileService::list_for_team(pool.get_ref(), team_id).await?;

    Ok(HttpResponse::Ok().json(files))
}

/// Configure file routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/teams/{team_id}/files").route("", web::get().to(list_files)));
}
