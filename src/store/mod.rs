//! Remote store access.
//!
//! `ScheduleStore`/`TaskStore` are the seams between the services and the
//! remote database; `SupabaseStore` implements both over PostgREST.

pub mod error;
pub mod schedule;
pub mod supabase;
pub mod task;

pub use error::{StoreError, StoreResult};
pub use schedule::{NewSchedule, ScheduleRow, ScheduleStore, ScheduleWithTasks};
pub use supabase::SupabaseStore;
pub use task::{NewTask, TaskRow, TaskStore};
