//! Fixed per-operation response message catalog.
//!
//! Every envelope and error body draws its message from here; no handler or
//! service builds message strings ad hoc.

pub mod schedule {
    pub mod create {
        pub const SUCCESS: &str = "Schedule created successfully";
        pub const ERROR: &str = "There was a problem creating the schedule";
    }

    pub mod fetch {
        pub const SUCCESS: &str = "Schedule found";
        pub const ERROR: &str = "There was a problem fetching the schedule";
        pub const NOT_FOUND: &str = "Schedule not found";
    }

    pub mod fetch_all {
        pub const SUCCESS: &str = "Schedules found";
        pub const ERROR: &str = "There was a problem fetching the schedules";
    }

    pub mod update {
        pub const SUCCESS: &str = "Schedule updated successfully";
        pub const ERROR: &str = "There was a problem updating the schedule";
        pub const NOT_FOUND: &str = "Schedule not found";
    }

    pub mod delete {
        pub const SUCCESS: &str = "Schedule deleted successfully";
        pub const ERROR: &str = "There was a problem deleting the schedule";
        /// The post-delete re-fetch still found the row.
        pub const DATA_FOUND: &str = "Deleting the schedule failed";
    }
}

pub mod task {
    pub mod create {
        pub const SUCCESS: &str = "Task created successfully";
        pub const ERROR: &str = "There was a problem creating the task";
    }

    pub mod fetch {
        pub const SUCCESS: &str = "Task found";
        pub const ERROR: &str = "There was a problem fetching the task";
        pub const NOT_FOUND: &str = "Task not found";
    }

    pub mod fetch_all {
        pub const SUCCESS: &str = "Tasks found";
        pub const ERROR: &str = "There was a problem fetching the tasks";
        pub const NOT_FOUND: &str = "Tasks not found";
    }

    pub mod update {
        pub const SUCCESS: &str = "Task updated successfully";
        pub const ERROR: &str = "There was a problem updating the task";
    }

    pub mod delete {
        pub const SUCCESS: &str = "Task deleted successfully";
        pub const ERROR: &str = "There was a problem deleting the task";
        pub const NOT_FOUND: &str = "Task not found";
    }
}
