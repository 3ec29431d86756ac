use actix_web::web;

pub mod health_handler;
pub mod notes_handler;
pub mod quiz_handler;

pub use health_handler::health_check;
pub use notes_handler::generate_notes;
pub use quiz_handler::{cancel_generation, generate_quiz, score_quiz};

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(generate_quiz)
        .service(score_quiz)
        .service(cancel_generation)
        .service(generate_notes);
}
