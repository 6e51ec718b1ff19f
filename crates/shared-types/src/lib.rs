pub mod error;
pub mod requests;
pub mod session;
pub mod student;

pub use error::*;
pub use requests::*;
pub use session::*;
pub use student::*;
