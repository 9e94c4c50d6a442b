use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Serialize;

use crate::db::{self, DbPool};

const SERVICE_NAME: &str = "meterdash";

#[derive(Serialize)]
pub struct HealthReport {
    service: &'static str,
    version: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadinessReport {
    service: &'static str,
    status: &'static str,
    database: &'static str,
}

/// Liveness probe: the process is up and serving requests.
/// Reports the service name and build version for fleet inventory.
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(HealthReport {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}

/// Readiness probe: verifies the database answers before the load
/// balancer routes dashboard traffic here. Responds 503 until it does.
pub async fn readiness(pool: web::Data<DbPool>) -> HttpResponse {
    if db::ping(pool.get_ref()).await {
        HttpResponse::Ok().json(ReadinessReport {
            service: SERVICE_NAME,
            status: "ready",
            database: "ok",
        })
    } else {
        HttpResponse::build(StatusCode::SERVICE_UNAVAILABLE).json(ReadinessReport {
            service: SERVICE_NAME,
            status: "not_ready",
            database: "unreachable",
        })
    }
}
