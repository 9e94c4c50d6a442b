use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::auth::SessionUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::services::DashboardService;

/// GET /api/dashboard - Full dashboard view for the signed-in user
///
/// Returns a tagged body: `status = "ready"` with the composed data, or
/// `status = "needs_onboarding"` when the profile is absent or onboarding
/// was never completed.
pub async fn get_dashboard(pool: web::Data<DbPool>, user: SessionUser) -> AppResult<HttpResponse> {
    let dashboard = DashboardService::load(pool.get_ref(), user.0, Utc::now()).await?;

    Ok(HttpResponse::Ok().json(dashboard))
}

/// Configure dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/dashboard").route("", web::get().to(get_dashboard)));
}
