pub mod distractor_service;
pub mod embed_service;
pub mod extract_service;
pub mod grading_service;
pub mod mcq_service;
pub mod quiz_service;
