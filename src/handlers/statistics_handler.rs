use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::utils::identity::{require_trainer, resolve_user};
use crate::utils::workout_stats::completion_rate;

/// Trainer dashboard numbers over the trailing 30 days.
#[derive(Debug, Serialize)]
pub struct TrainerStatistics {
    pub total_clients: i64,
    pub active_clients: i64,
    pub todays_sessions: i64,
    /// Completed payments over the window, in minor currency units.
    pub monthly_revenue: i64,
    pub completion_rate: f64,
    pub new_clients_this_month: i64,
}

#[tracing::instrument(name = "Get trainer statistics", skip(pool, claims))]
pub async fn get_trainer_statistics(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let now = Utc::now();
    let thirty_days_ago = now - Duration::days(30);
    let day_start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();

    let total_clients = db::clients::count_by_trainer(&pool, trainer.id).await?;
    let active_clients =
        db::clients::count_active_since(&pool, trainer.id, thirty_days_ago).await?;
    let todays_sessions =
        db::workouts::count_by_trainer_on_day(&pool, trainer.id, day_start, now).await?;
    let monthly_revenue =
        db::payments::sum_completed_since(&pool, trainer.id, thirty_days_ago).await?;
    let (completed, total) = db::workouts::completion_counts_by_trainer(&pool, trainer.id).await?;
    let new_clients_this_month =
        db::clients::count_created_between(&pool, trainer.id, thirty_days_ago, now).await?;

    Ok(HttpResponse::Ok().json(TrainerStatistics {
        total_clients,
        active_clients,
        todays_sessions,
        monthly_revenue,
        completion_rate: completion_rate(completed, total),
        new_clients_this_month,
    }))
}
