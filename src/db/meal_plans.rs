use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::meal::{
    MealPlan, MealPlanCreate, MealPlanMeal, MealPlanMealCreate, MealPlanUpdate,
};

/// Plan row and its weekly schedule land in one transaction.
#[tracing::instrument(
    name = "Create meal plan with schedule",
    skip(pool, plan),
    fields(name = %plan.name, meal_count = plan.meals.len())
)]
pub async fn create_meal_plan(
    pool: &PgPool,
    trainer_id: Uuid,
    plan: &MealPlanCreate,
) -> Result<MealPlan, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, MealPlan>(
        r#"
        INSERT INTO meal_plans (
            id, name, trainer_id, client_id, start_date, end_date,
            target_calories, target_protein, target_carbs, target_fat,
            is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, TRUE, $11, $11)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&plan.name)
    .bind(trainer_id)
    .bind(plan.client_id)
    .bind(plan.start_date)
    .bind(plan.end_date)
    .bind(plan.target_calories)
    .bind(plan.target_protein)
    .bind(plan.target_carbs)
    .bind(plan.target_fat)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for meal in &plan.meals {
        sqlx::query(
            r#"
            INSERT INTO meal_plan_meals (id, meal_plan_id, meal_id, day_of_week, meal_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(created.id)
        .bind(meal.meal_id)
        .bind(meal.day_of_week)
        .bind(meal.meal_time)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(created)
}

pub async fn get_meal_plan(pool: &PgPool, id: Uuid) -> Result<Option<MealPlan>, sqlx::Error> {
    sqlx::query_as::<_, MealPlan>("SELECT * FROM meal_plans WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_schedule(
    pool: &PgPool,
    meal_plan_id: Uuid,
) -> Result<Vec<MealPlanMeal>, sqlx::Error> {
    sqlx::query_as::<_, MealPlanMeal>(
        r#"
        SELECT * FROM meal_plan_meals
        WHERE meal_plan_id = $1
        ORDER BY day_of_week, meal_time
        "#,
    )
    .bind(meal_plan_id)
    .fetch_all(pool)
    .await
}

pub async fn list_by_trainer(
    pool: &PgPool,
    trainer_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<MealPlan>, sqlx::Error> {
    sqlx::query_as::<_, MealPlan>(
        r#"
        SELECT * FROM meal_plans
        WHERE trainer_id = $1 AND is_active = TRUE
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(trainer_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

/// The plan currently covering `now` for the client. With overlapping
/// active plans the most recently started one wins.
pub async fn get_client_active_plan(
    pool: &PgPool,
    client_id: Uuid,
) -> Result<Option<MealPlan>, sqlx::Error> {
    sqlx::query_as::<_, MealPlan>(
        r#"
        SELECT * FROM meal_plans
        WHERE client_id = $1
          AND is_active = TRUE
          AND start_date <= $2
          AND (end_date IS NULL OR end_date >= $2)
        ORDER BY start_date DESC
        LIMIT 1
        "#,
    )
    .bind(client_id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Update meal plan", skip(pool, update))]
pub async fn update_meal_plan(
    pool: &PgPool,
    id: Uuid,
    update: &MealPlanUpdate,
) -> Result<Option<MealPlan>, sqlx::Error> {
    sqlx::query_as::<_, MealPlan>(
        r#"
        UPDATE meal_plans
        SET name = COALESCE($2, name),
            start_date = COALESCE($3, start_date),
            end_date = COALESCE($4, end_date),
            target_calories = COALESCE($5, target_calories),
            target_protein = COALESCE($6, target_protein),
            target_carbs = COALESCE($7, target_carbs),
            target_fat = COALESCE($8, target_fat),
            is_active = COALESCE($9, is_active),
            updated_at = $10
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&update.name)
    .bind(update.start_date)
    .bind(update.end_date)
    .bind(update.target_calories)
    .bind(update.target_protein)
    .bind(update.target_carbs)
    .bind(update.target_fat)
    .bind(update.is_active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete meal plan", skip(pool))]
pub async fn delete_meal_plan(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM meal_plans WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[tracing::instrument(name = "Add meal to plan", skip(pool, meal))]
pub async fn add_meal(
    pool: &PgPool,
    meal_plan_id: Uuid,
    meal: &MealPlanMealCreate,
) -> Result<MealPlanMeal, sqlx::Error> {
    sqlx::query_as::<_, MealPlanMeal>(
        r#"
        INSERT INTO meal_plan_meals (id, meal_plan_id, meal_id, day_of_week, meal_time, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(meal_plan_id)
    .bind(meal.meal_id)
    .bind(meal.day_of_week)
    .bind(meal.meal_time)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Boolean result: removing an absent pairing is not an error.
#[tracing::instrument(name = "Remove meal from plan", skip(pool))]
pub async fn remove_meal(
    pool: &PgPool,
    meal_plan_id: Uuid,
    meal_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM meal_plan_meals WHERE meal_plan_id = $1 AND meal_id = $2")
        .bind(meal_plan_id)
        .bind(meal_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
