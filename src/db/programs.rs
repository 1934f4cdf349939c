use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::program::{
    Program, ProgramCreate, ProgramExercise, ProgramExerciseCreate, ProgramExerciseUpdate,
    ProgramUpdate,
};

/// Write the program row and all of its exercise assignments in a single
/// transaction: either every child lands or none do.
#[tracing::instrument(
    name = "Create program with exercises",
    skip(pool, program),
    fields(name = %program.name, exercise_count = program.exercises.len())
)]
pub async fn create_program(
    pool: &PgPool,
    trainer_id: Uuid,
    program: &ProgramCreate,
) -> Result<Program, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, Program>(
        r#"
        INSERT INTO programs (
            id, name, description, trainer_id, client_id, duration_weeks,
            sessions_per_week, difficulty_level, goals, is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE, $10, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&program.name)
    .bind(&program.description)
    .bind(trainer_id)
    .bind(program.client_id)
    .bind(program.duration_weeks)
    .bind(program.sessions_per_week)
    .bind(program.difficulty_level)
    .bind(&program.goals)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for exercise in &program.exercises {
        sqlx::query(
            r#"
            INSERT INTO program_exercises (
                id, program_id, exercise_id, sets, reps, weight, rest_seconds,
                notes, order_in_program, week_number, day_number, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(created.id)
        .bind(exercise.exercise_id)
        .bind(exercise.sets)
        .bind(&exercise.reps)
        .bind(exercise.weight)
        .bind(exercise.rest_seconds)
        .bind(&exercise.notes)
        .bind(exercise.order_in_program)
        .bind(exercise.week_number)
        .bind(exercise.day_number)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(created)
}

pub async fn get_program(pool: &PgPool, id: Uuid) -> Result<Option<Program>, sqlx::Error> {
    sqlx::query_as::<_, Program>("SELECT * FROM programs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_exercises(pool: &PgPool, program_id: Uuid) -> Result<Vec<ProgramExercise>, sqlx::Error> {
    sqlx::query_as::<_, ProgramExercise>(
        r#"
        SELECT * FROM program_exercises
        WHERE program_id = $1
        ORDER BY week_number, day_number, order_in_program
        "#,
    )
    .bind(program_id)
    .fetch_all(pool)
    .await
}

pub async fn list_by_trainer(
    pool: &PgPool,
    trainer_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<Program>, sqlx::Error> {
    sqlx::query_as::<_, Program>(
        r#"
        SELECT * FROM programs
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

pub async fn list_by_client(pool: &PgPool, client_id: Uuid) -> Result<Vec<Program>, sqlx::Error> {
    sqlx::query_as::<_, Program>(
        "SELECT * FROM programs WHERE client_id = $1 AND is_active = TRUE ORDER BY created_at DESC",
    )
    .bind(client_id)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update program", skip(pool, update))]
pub async fn update_program(
    pool: &PgPool,
    id: Uuid,
    update: &ProgramUpdate,
) -> Result<Option<Program>, sqlx::Error> {
    sqlx::query_as::<_, Program>(
        r#"
        UPDATE programs
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            duration_weeks = COALESCE($4, duration_weeks),
            sessions_per_week = COALESCE($5, sessions_per_week),
            difficulty_level = COALESCE($6, difficulty_level),
            goals = COALESCE($7, goals),
            is_active = COALESCE($8, is_active),
            updated_at = $9
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&update.name)
    .bind(&update.description)
    .bind(update.duration_weeks)
    .bind(update.sessions_per_week)
    .bind(update.difficulty_level)
    .bind(&update.goals)
    .bind(update.is_active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete program", skip(pool))]
pub async fn delete_program(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    // program_exercises go with the program via the cascade constraint
    let result = sqlx::query("DELETE FROM programs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[tracing::instrument(name = "Add exercise to program", skip(pool, exercise))]
pub async fn add_exercise(
    pool: &PgPool,
    program_id: Uuid,
    exercise: &ProgramExerciseCreate,
) -> Result<ProgramExercise, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, ProgramExercise>(
        r#"
        INSERT INTO program_exercises (
            id, program_id, exercise_id, sets, reps, weight, rest_seconds,
            notes, order_in_program, week_number, day_number, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(program_id)
    .bind(exercise.exercise_id)
    .bind(exercise.sets)
    .bind(&exercise.reps)
    .bind(exercise.weight)
    .bind(exercise.rest_seconds)
    .bind(&exercise.notes)
    .bind(exercise.order_in_program)
    .bind(exercise.week_number)
    .bind(exercise.day_number)
    .bind(now)
    .fetch_one(pool)
    .await
}

#[tracing::instrument(name = "Update program exercise", skip(pool, update))]
pub async fn update_exercise(
    pool: &PgPool,
    program_exercise_id: Uuid,
    update: &ProgramExerciseUpdate,
) -> Result<Option<ProgramExercise>, sqlx::Error> {
    sqlx::query_as::<_, ProgramExercise>(
        r#"
        UPDATE program_exercises
        SET sets = COALESCE($2, sets),
            reps = COALESCE($3, reps),
            weight = COALESCE($4, weight),
            rest_seconds = COALESCE($5, rest_seconds),
            notes = COALESCE($6, notes),
            order_in_program = COALESCE($7, order_in_program),
            week_number = COALESCE($8, week_number),
            day_number = COALESCE($9, day_number),
            updated_at = $10
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(program_exercise_id)
    .bind(update.sets)
    .bind(&update.reps)
    .bind(update.weight)
    .bind(update.rest_seconds)
    .bind(&update.notes)
    .bind(update.order_in_program)
    .bind(update.week_number)
    .bind(update.day_number)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Matches on the (program, exercise) pair. Absence is not an error; the
/// boolean says whether anything was removed.
#[tracing::instrument(name = "Remove exercise from program", skip(pool))]
pub async fn remove_exercise(
    pool: &PgPool,
    program_id: Uuid,
    exercise_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("DELETE FROM program_exercises WHERE program_id = $1 AND exercise_id = $2")
            .bind(program_id)
            .bind(exercise_id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}
