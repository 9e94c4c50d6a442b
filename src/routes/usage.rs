use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::services::usage;
use crate::services::UsageLogService;

/// GET /api/usage - Current-month usage summary for the signed-in user
pub async fn get_usage(pool: web::Data<DbPool>, user: AuthenticatedUser) -> AppResult<HttpResponse> {
    let profile = user.0;

    let window_start = usage::current_month_window_start(Utc::now());
    let api_call_count =
        UsageLogService::count_api_calls_since(pool.get_ref(), profile.id, window_start).await?;

    // Storage accounting is not wired up yet; the view still renders the bar
    let view = usage::build_usage_view(profile.tier(), api_call_count, 0);

    Ok(HttpResponse::Ok().json(view))
}

/// Configure usage routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/usage").route("", web::get().to(get_usage)));
}
