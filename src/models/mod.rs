pub mod mood;
pub mod self_care;
pub mod stress;
