//! Entity services.
//!
//! Each service method is one independent request/response pair against the
//! remote store: validate nothing (handlers already did), issue the call,
//! translate the outcome into an envelope or a typed error.

pub mod error;
pub mod schedule;
pub mod task;

pub use error::ServiceError;
pub use schedule::ScheduleService;
pub use task::TaskService;
