//! Sample survey documents for tests and documentation.
//!
//! Each module provides a typed builder and the equivalent JSON document,
//! so tests can cover both the raw-document and typed paths.

pub mod course_feedback;
pub mod quick_poll;

pub use course_feedback::{COURSE_FEEDBACK_JSON, course_feedback};
pub use quick_poll::{QUICK_POLL_JSON, quick_poll};
