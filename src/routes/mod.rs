use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod clients;
pub mod exercises;
pub mod goals;
pub mod meals;
pub mod payments;
pub mod programs;
pub mod progress;
pub mod statistics;
pub mod trainers;
pub mod webhook;
pub mod workouts;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::root)
        .service(backend_health::backend_health);

    // Public: registration, login and the processor webhook
    cfg.service(
        web::scope("/api/v1")
            .service(auth::register)
            .service(auth::login)
            .service(webhook::stripe_webhook)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(auth::me)
                    .configure(trainers::routes)
                    .configure(clients::routes)
                    .configure(exercises::routes)
                    .configure(programs::routes)
                    .configure(meals::routes)
                    .configure(progress::routes)
                    .configure(workouts::routes)
                    .configure(goals::routes)
                    .configure(payments::routes)
                    .configure(statistics::routes),
            ),
    );
}
