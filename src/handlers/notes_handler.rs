use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::request::GenerateNotesRequest};

#[post("/api/notes")]
async fn generate_notes(
    state: web::Data<AppState>,
    request: web::Json<GenerateNotesRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let generation = state.registry.start(request.generation_id.as_deref())?;
    let response = state
        .notes_service
        .generate_notes(&request.topic, request.kind, generation.token())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
