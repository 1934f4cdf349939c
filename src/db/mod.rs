pub mod clients;
pub mod exercises;
pub mod goals;
pub mod meal_plans;
pub mod meals;
pub mod payment_methods;
pub mod payments;
pub mod programs;
pub mod progress;
pub mod subscriptions;
pub mod trainers;
pub mod users;
pub mod workouts;
