pub mod otp;
pub mod score;
pub mod user;
