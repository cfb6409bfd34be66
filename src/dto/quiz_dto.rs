use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::Error;
use crate::models::mcq::McqRecord;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionForUser {
    pub id: usize,
    pub question: String,
    pub options: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateQuizResponse {
    pub quiz_id: String,
    pub questions: Vec<QuestionForUser>,
}

impl GenerateQuizResponse {
    pub fn new(quiz_id: String, records: Vec<McqRecord>) -> Self {
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(id, r)| QuestionForUser {
                id,
                question: r.stem,
                options: r.options,
            })
            .collect();
        Self { quiz_id, questions }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub bytes: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

/// `multipart/form-data` body of `POST /generate-quiz/`.
#[derive(Debug, Clone, Validate, ToSchema)]
pub struct GenerateQuizForm {
    #[validate(range(min = 0, message = "num_questions must not be negative"))]
    pub num_questions: i64,
    #[schema(value_type = String, format = Binary)]
    pub file: UploadedFile,
}

#[axum::async_trait]
impl<S> FromRequest<S> for GenerateQuizForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| Error::BadRequest(e.body_text()))?;

        let mut num_questions = None;
        let mut file = None;
        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().unwrap_or_default().to_string();
            match field_name.as_str() {
                "num_questions" => {
                    let raw = field.text().await?;
                    let parsed = raw.trim().parse::<i64>().map_err(|_| {
                        Error::BadRequest("num_questions must be an integer".to_string())
                    })?;
                    num_questions = Some(parsed);
                }
                "file" => {
                    let filename = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    file = Some(UploadedFile {
                        bytes,
                        filename,
                        content_type,
                    });
                }
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }

        let form = Self {
            num_questions: num_questions
                .ok_or_else(|| Error::BadRequest("num_questions is required".to_string()))?,
            file: file.ok_or_else(|| Error::BadRequest("file is required".to_string()))?,
        };
        form.validate()?;
        Ok(form)
    }
}

/// Body of `POST /submit-quiz/`, sent as multipart or urlencoded form.
///
/// `answers` is a JSON object of question index to option letter.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitQuizForm {
    #[validate(length(min = 1, message = "quiz_id is required"))]
    pub quiz_id: String,
    #[schema(example = "{\"0\": \"B\", \"1\": \"A\"}")]
    pub answers: String,
}

#[axum::async_trait]
impl<S> FromRequest<S> for SubmitQuizForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        let form = if is_multipart {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| Error::BadRequest(e.body_text()))?;
            let mut quiz_id = None;
            let mut answers = None;
            while let Some(field) = multipart.next_field().await? {
                let field_name = field.name().unwrap_or_default().to_string();
                match field_name.as_str() {
                    "quiz_id" => quiz_id = Some(field.text().await?),
                    "answers" => answers = Some(field.text().await?),
                    _ => {}
                }
            }
            Self {
                quiz_id: quiz_id
                    .ok_or_else(|| Error::BadRequest("quiz_id is required".to_string()))?,
                answers: answers
                    .ok_or_else(|| Error::BadRequest("answers is required".to_string()))?,
            }
        } else {
            let Form(form) = Form::<Self>::from_request(req, state)
                .await
                .map_err(|e| Error::BadRequest(e.body_text()))?;
            form
        };

        form.validate()?;
        Ok(form)
    }
}

/// Parses the submitted answer map. Values must be strings or null.
pub fn parse_answers(raw: &str) -> crate::error::Result<HashMap<String, Option<String>>> {
    serde_json::from_str(raw).map_err(|_| Error::BadRequest("Invalid answers format.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_numbers_questions_from_zero() {
        let record = McqRecord {
            stem: "______ occurs in plants.".to_string(),
            options: BTreeMap::from([
                ("A".to_string(), "plants".to_string()),
                ("B".to_string(), "Photosynthesis".to_string()),
            ]),
            correct_letter: "B".to_string(),
        };
        let response = GenerateQuizResponse::new("abc".to_string(), vec![record.clone(), record]);
        assert_eq!(response.questions[0].id, 0);
        assert_eq!(response.questions[1].id, 1);
        assert_eq!(response.questions[1].question, "______ occurs in plants.");

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["questions"][0].get("correct_letter").is_none());
    }

    #[test]
    fn answers_must_be_an_object_of_strings() {
        let parsed = parse_answers(r#"{"0": "A", "1": null}"#).unwrap();
        assert_eq!(parsed["0"].as_deref(), Some("A"));
        assert_eq!(parsed["1"], None);

        for bad in ["not json", "[1, 2]", r#"{"0": 3}"#] {
            assert!(matches!(parse_answers(bad), Err(Error::BadRequest(_))));
        }
    }

    #[test]
    fn negative_question_count_fails_validation() {
        let form = GenerateQuizForm {
            num_questions: -1,
            file: UploadedFile::default(),
        };
        assert!(form.validate().is_err());
    }
}
