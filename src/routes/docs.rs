use axum::Json;
use utoipa::OpenApi;

use crate::dto::quiz_dto::{GenerateQuizForm, GenerateQuizResponse, QuestionForUser, SubmitQuizForm};
use crate::services::grading_service::{GradeReport, QuestionResult};

#[derive(OpenApi)]
#[openapi(
    info(title = "MCQ Generator API"),
    paths(
        crate::routes::quiz::generate_quiz,
        crate::routes::quiz::submit_quiz,
        crate::routes::health::health,
    ),
    components(schemas(
        GenerateQuizForm,
        GenerateQuizResponse,
        QuestionForUser,
        SubmitQuizForm,
        GradeReport,
        QuestionResult,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
