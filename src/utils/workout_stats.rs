use crate::models::workout::{WorkoutLog, WorkoutStats};

/// Aggregate completed sessions from a trailing window of `days` days.
/// Null durations/calories count as zero; averages are zero-guarded so an
/// empty window never divides by zero.
pub fn compute_workout_stats(workouts: &[WorkoutLog], days: i64) -> WorkoutStats {
    let total_workouts = workouts.len() as i64;
    let total_duration_minutes: i64 = workouts
        .iter()
        .map(|w| w.duration_minutes.unwrap_or(0) as i64)
        .sum();
    let total_calories_burned: i64 = workouts
        .iter()
        .map(|w| w.calories_burned.unwrap_or(0) as i64)
        .sum();

    let average_duration = if total_workouts > 0 {
        total_duration_minutes as f64 / total_workouts as f64
    } else {
        0.0
    };
    let workouts_per_week = if days > 0 {
        (total_workouts as f64 / days as f64) * 7.0
    } else {
        0.0
    };

    WorkoutStats {
        total_workouts,
        total_duration_minutes,
        total_calories_burned,
        average_duration,
        workouts_per_week,
    }
}

/// Percentage of completed sessions, zero-guarded.
pub fn completion_rate(completed: i64, total: i64) -> f64 {
    if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn workout(duration: Option<i32>, calories: Option<i32>) -> WorkoutLog {
        let now = Utc::now();
        WorkoutLog {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            program_id: None,
            trainer_id: Uuid::new_v4(),
            date: now,
            duration_minutes: duration,
            calories_burned: calories,
            notes: None,
            completed: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_window_returns_all_zeros() {
        let stats = compute_workout_stats(&[], 30);
        assert_eq!(
            stats,
            WorkoutStats {
                total_workouts: 0,
                total_duration_minutes: 0,
                total_calories_burned: 0,
                average_duration: 0.0,
                workouts_per_week: 0.0,
            }
        );
    }

    #[test]
    fn three_sessions_average_correctly() {
        let workouts = vec![
            workout(Some(30), Some(200)),
            workout(Some(45), Some(300)),
            workout(Some(60), Some(400)),
        ];
        let stats = compute_workout_stats(&workouts, 30);
        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.total_duration_minutes, 135);
        assert_eq!(stats.total_calories_burned, 900);
        assert_eq!(stats.average_duration, 45.0);
        assert!((stats.workouts_per_week - 0.7).abs() < 1e-9);
    }

    #[test]
    fn missing_duration_counts_as_zero() {
        let workouts = vec![workout(None, None), workout(Some(40), Some(250))];
        let stats = compute_workout_stats(&workouts, 30);
        assert_eq!(stats.total_duration_minutes, 40);
        assert_eq!(stats.total_calories_burned, 250);
        assert_eq!(stats.average_duration, 20.0);
    }

    #[test]
    fn zero_day_window_does_not_divide_by_zero() {
        let stats = compute_workout_stats(&[workout(Some(30), None)], 0);
        assert_eq!(stats.workouts_per_week, 0.0);
    }

    #[test]
    fn completion_rate_is_zero_guarded() {
        assert_eq!(completion_rate(0, 0), 0.0);
        assert_eq!(completion_rate(3, 4), 75.0);
    }
}
