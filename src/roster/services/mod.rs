//! Application services for roster sign-in.

mod session;

pub use session::{SessionService, SessionServiceError, SessionServiceResult};
