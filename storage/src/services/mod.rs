pub mod public_id;
pub mod ranking;
pub mod submission;
