mod otp;
mod score;
mod user;

pub use otp::OtpChallenge;
pub use score::ScoreEvent;
pub use user::User;
