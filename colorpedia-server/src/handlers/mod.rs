pub mod analyze;
pub mod music;
