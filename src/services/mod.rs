pub mod analytics;
pub mod clock;
