use actix_web::{post, web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{GenerateQuizRequest, ScoreQuizRequest},
        response::{CancelGenerationResponse, QuizResponse},
    },
    services::performance_service::analyze_quiz_performance,
};

#[post("/api/quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let count = request
        .question_count
        .unwrap_or(state.config.quiz_question_count);
    let generation = state.registry.start(request.generation_id.as_deref())?;

    let outcome = state
        .quiz_service
        .get_questions(&request.topic, count, request.difficulty, generation.token())
        .await?;

    Ok(HttpResponse::Ok().json(QuizResponse {
        questions: outcome.questions,
        source: outcome.source,
        notice: outcome.notice,
        generated_at: Utc::now(),
    }))
}

#[post("/api/quiz/score")]
async fn score_quiz(request: web::Json<ScoreQuizRequest>) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let performance = analyze_quiz_performance(&request.questions, &request.selected_answers)?;
    Ok(HttpResponse::Ok().json(performance))
}

#[post("/api/generations/{id}/cancel")]
async fn cancel_generation(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let cancelled = state.registry.cancel(&id);
    if !cancelled {
        log::debug!("No in-flight generation '{}' to cancel", id);
    }
    HttpResponse::Ok().json(CancelGenerationResponse { cancelled })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::Config,
        services::model_service::MockAnswerFetcher,
        test_utils::fixtures::{graph_section_response, sample_question},
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn state_with(mock: MockAnswerFetcher) -> web::Data<AppState> {
        web::Data::new(AppState::with_fetcher(Config::test_config(), Arc::new(mock)))
    }

    #[actix_web::test]
    async fn generates_requested_number_of_questions() {
        let mut mock = MockAnswerFetcher::new();
        mock.expect_generate_text()
            .times(1)
            .returning(|_| Ok(graph_section_response(0..10)));
        let state = state_with(mock);
        let app = test::init_service(App::new().app_data(state.clone()).service(generate_quiz)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz")
            .set_json(json!({"topic": "graph theory", "questionCount": 5, "generationId": "gen-1"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["questions"].as_array().map(Vec::len), Some(5));
        assert_eq!(body["source"], "generated");
        assert_eq!(body["questions"][0]["id"], "question-1");
        assert!(body.get("notice").is_none());
        assert_eq!(state.registry.active_count(), 0);
    }

    #[actix_web::test]
    async fn question_count_defaults_to_config() {
        let mut mock = MockAnswerFetcher::new();
        mock.expect_generate_text()
            .returning(|_| Ok(graph_section_response(0..12)));
        let app = test::init_service(App::new().app_data(state_with(mock)).service(generate_quiz)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz")
            .set_json(json!({"topic": "graph theory"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["questions"].as_array().map(Vec::len), Some(10));
    }

    #[actix_web::test]
    async fn blank_topic_is_a_bad_request() {
        let mut mock = MockAnswerFetcher::new();
        mock.expect_generate_text().never();
        let app = test::init_service(App::new().app_data(state_with(mock)).service(generate_quiz)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz")
            .set_json(json!({"topic": "  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn scores_submitted_answers() {
        let app = test::init_service(App::new().service(score_quiz)).await;
        let questions = vec![
            sample_question("q1", "What is a compiler?"),
            sample_question("q2", "What does REST describe?"),
        ];

        let req = test::TestRequest::post()
            .uri("/api/quiz/score")
            .set_json(json!({"questions": questions, "selectedAnswers": [1, 3]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["correctCount"], 1);
        assert_eq!(body["percentage"], 50);
        assert_eq!(body["weakAreas"], json!(["REST"]));
    }

    #[actix_web::test]
    async fn mismatched_answers_are_rejected() {
        let app = test::init_service(App::new().service(score_quiz)).await;
        let questions = vec![sample_question("q1", "What is a compiler?")];

        let req = test::TestRequest::post()
            .uri("/api/quiz/score")
            .set_json(json!({"questions": questions, "selectedAnswers": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_submitted_question_is_rejected() {
        let app = test::init_service(App::new().service(score_quiz)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/score")
            .set_json(json!({
                "questions": [{
                    "id": "q1",
                    "questionText": "What is a compiler?",
                    "options": ["a", "b", "c", "d"],
                    "correctOptionIndex": 9,
                    "explanation": "e"
                }],
                "selectedAnswers": [9]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn cancelling_unknown_generation_reports_false() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(MockAnswerFetcher::new()))
                .service(cancel_generation),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generations/nope/cancel")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"cancelled": false}));
    }

    #[actix_web::test]
    async fn cancelling_registered_generation_reports_true() {
        let state = state_with(MockAnswerFetcher::new());
        let generation = state.registry.start(Some("gen-7")).expect("fresh id");
        let app = test::init_service(App::new().app_data(state.clone()).service(cancel_generation)).await;

        let req = test::TestRequest::post()
            .uri("/api/generations/gen-7/cancel")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"cancelled": true}));
        assert!(generation.token().is_cancelled());
    }

    #[actix_web::test]
    async fn in_flight_generation_id_is_rejected() {
        let mut mock = MockAnswerFetcher::new();
        mock.expect_generate_text().never();
        let state = state_with(mock);
        let _running = state.registry.start(Some("gen-8")).expect("fresh id");
        let app = test::init_service(App::new().app_data(state.clone()).service(generate_quiz)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz")
            .set_json(json!({"topic": "graph theory", "generationId": "gen-8"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.registry.active_count(), 1);
    }
}
