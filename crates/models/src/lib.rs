pub mod date;
pub mod user;
