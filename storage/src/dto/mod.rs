pub mod ranking;
pub mod score;
pub mod user;
