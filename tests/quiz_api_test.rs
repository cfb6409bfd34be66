use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use mcq_generator::{app, config::Config, database::quiz_repository::QuizRepository, AppState};
use serde_json::Value as JsonValue;
use tokio_test::assert_ok;
use tower::ServiceExt;

const BOUNDARY: &str = "mcq-test-boundary";
const SAMPLE: &str = "The Eiffel Tower is in Paris. Photosynthesis occurs in plants.";

fn test_config() -> Config {
    Config {
        server_address: "127.0.0.1:0".to_string(),
        max_questions: 10,
        max_upload_bytes: 1024 * 1024,
        generation_timeout_secs: 30,
        generation_seed: Some(3),
        ..Config::default()
    }
}

fn test_app() -> (Router, AppState) {
    let state = AppState::new(test_config(), QuizRepository::in_memory());
    (app(state.clone()), state)
}

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: text/plain\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

fn generate_request(num_questions: &str, text: &str) -> Request<Body> {
    multipart_request(
        "/generate-quiz/",
        multipart_body(&[("num_questions", num_questions)], Some(("notes.txt", text.as_bytes()))),
    )
}

async fn json_body(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_ok!(serde_json::from_slice(&bytes))
}

#[tokio::test]
async fn generate_then_submit_scores_full_marks() {
    let (app, state) = test_app();

    let resp = app.clone().oneshot(generate_request("2", SAMPLE)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;

    let quiz_id = body["quiz_id"].as_str().unwrap().to_string();
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    for (idx, q) in questions.iter().enumerate() {
        assert_eq!(q["id"], idx);
        assert!(q["question"].as_str().unwrap().contains("______"));
        let options = q["options"].as_object().unwrap();
        assert!((2..=4).contains(&options.len()));
    }

    let stored = state
        .quiz_service
        .repository()
        .get(&quiz_id)
        .await
        .unwrap()
        .unwrap();
    let answers = serde_json::to_string(&stored.correct_answers.0).unwrap();

    let req = Request::builder()
        .method("POST")
        .uri("/submit-quiz/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "quiz_id={}&answers={}",
            quiz_id,
            urlencode(&answers)
        )))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["score"], 2);
    assert_eq!(body["total"], 2);
    assert_eq!(body["percentage"], 100.0);
    assert_eq!(body["results"]["0"]["is_correct"], true);
}

#[tokio::test]
async fn submit_accepts_multipart_and_reports_missing_answers() {
    let (app, _) = test_app();

    let resp = app.clone().oneshot(generate_request("2", SAMPLE)).await.unwrap();
    let quiz_id = json_body(resp).await["quiz_id"].as_str().unwrap().to_string();

    let body = multipart_body(&[("quiz_id", &quiz_id), ("answers", "{}")], None);
    let resp = app.oneshot(multipart_request("/submit-quiz/", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["score"], 0);
    assert_eq!(body["percentage"], 0.0);
    assert!(body["results"]["1"]["user_answer"].is_null());
}

#[tokio::test]
async fn empty_upload_is_bad_request() {
    let (app, _) = test_app();
    let resp = app.oneshot(generate_request("3", "   ")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Could not extract text from PDF.");
}

#[tokio::test]
async fn text_without_subjects_is_not_found() {
    let (app, _) = test_app();
    let resp = app
        .oneshot(generate_request("3", "It is what it is. We were there."))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Could not generate MCQs from the provided text.");
}

#[tokio::test]
async fn non_numeric_question_count_is_rejected() {
    let (app, _) = test_app();
    let resp = app.oneshot(generate_request("lots", SAMPLE)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_quiz_is_not_found() {
    let (app, _) = test_app();
    let req = Request::builder()
        .method("POST")
        .uri("/submit-quiz/")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("quiz_id=missing&answers=%7B%7D"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Quiz ID not found or expired.");
}

#[tokio::test]
async fn malformed_answers_are_bad_request() {
    let (app, _) = test_app();
    let resp = app.clone().oneshot(generate_request("1", SAMPLE)).await.unwrap();
    let quiz_id = json_body(resp).await["quiz_id"].as_str().unwrap().to_string();

    let body = multipart_body(&[("quiz_id", &quiz_id), ("answers", "not json")], None);
    let resp = app.oneshot(multipart_request("/submit-quiz/", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Invalid answers format.");
}

#[tokio::test]
async fn health_and_openapi() {
    let (app, _) = test_app();

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");

    let req = Request::builder()
        .uri("/api/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = json_body(resp).await;
    let schema_ref = |path: &str| {
        doc["paths"][path]["post"]["responses"]["200"]["content"]["application/json"]["schema"]["$ref"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    };
    assert_eq!(schema_ref("/generate-quiz/"), "#/components/schemas/GenerateQuizResponse");
    assert_eq!(schema_ref("/submit-quiz/"), "#/components/schemas/GradeReport");
}

fn urlencode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}
