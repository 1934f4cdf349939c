pub mod auth_handler;
pub mod client_handler;
pub mod exercise_handler;
pub mod goal_handler;
pub mod meal_handler;
pub mod meal_plan_handler;
pub mod payment_handler;
pub mod payment_method_handler;
pub mod program_handler;
pub mod progress_handler;
pub mod registration_handler;
pub mod statistics_handler;
pub mod subscription_handler;
pub mod trainer_handler;
pub mod webhook_handler;
pub mod workout_handler;
