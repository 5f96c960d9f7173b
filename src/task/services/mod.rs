//! Application services for task creation and lifecycle orchestration.

mod board;
mod config;
mod lifecycle;

pub use board::TaskBoard;
pub use config::LifecycleConfig;
pub use lifecycle::{
    CreateTasksRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
