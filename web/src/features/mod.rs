pub mod ranking;
pub mod scores;
pub mod users;
