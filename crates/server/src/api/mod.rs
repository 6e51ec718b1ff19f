mod auth;
pub use auth::*;

mod student;
pub use student::*;
