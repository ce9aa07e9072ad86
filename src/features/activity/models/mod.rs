mod activity;

pub use activity::{ActivityLog, ActivityType};
