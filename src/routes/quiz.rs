use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    dto::quiz_dto::{GenerateQuizForm, GenerateQuizResponse, SubmitQuizForm},
    error::Result,
    services::{extract_service, grading_service::GradeReport},
    AppState,
};

#[utoipa::path(
    post,
    path = "/generate-quiz/",
    request_body(content = GenerateQuizForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Quiz generated", body = GenerateQuizResponse),
        (status = 400, description = "Text could not be extracted from the upload"),
        (status = 404, description = "No questions could be generated"),
        (status = 504, description = "Generation exceeded the configured deadline")
    )
)]
#[axum::debug_handler]
pub async fn generate_quiz(
    State(state): State<AppState>,
    form: GenerateQuizForm,
) -> Result<impl IntoResponse> {
    let file = form.file;
    tracing::info!(
        filename = file.filename.as_deref().unwrap_or("<unnamed>"),
        size = file.bytes.len(),
        num_questions = form.num_questions,
        "generating quiz"
    );

    let text =
        extract_service::extract_text_blocking(file.bytes, file.filename, file.content_type).await?;
    let response = state.quiz_service.create_quiz(text, form.num_questions).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/submit-quiz/",
    request_body(content = SubmitQuizForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Submission graded", body = GradeReport),
        (status = 400, description = "Invalid answers format"),
        (status = 404, description = "Quiz ID not found or expired")
    )
)]
#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    form: SubmitQuizForm,
) -> Result<impl IntoResponse> {
    let report = state
        .quiz_service
        .grade_quiz(&form.quiz_id, &form.answers)
        .await?;
    Ok(Json(report))
}
