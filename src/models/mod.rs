pub mod mcq;
pub mod quiz;
