pub mod pool;
pub mod quiz_repository;
