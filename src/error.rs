use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotEligibleUser,
    TaskNotFound,
    UserNotFound,
    InvalidStatusTransition,
    CycleDetected,
    ValidationError,
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotEligibleUser => "NOT_ELIGIBLE_USER",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidStatusTransition => "INVALID_STATUS_TRANSITION",
            Self::CycleDetected => "CYCLE_DETECTED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::IoError => "IO_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TrackerError {
    pub code: ErrorCode,
    pub message: String,
}

impl TrackerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_eligible_user(user: &str) -> Self {
        Self::new(
            ErrorCode::NotEligibleUser,
            format!("User \"{user}\" is not a member of the project"),
        )
    }

    pub fn task_not_found(task: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task \"{task}\" is not part of the project"),
        )
    }

    pub fn unknown_task(id: &str) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {id}"))
    }

    pub fn unknown_user(id: &str) -> Self {
        Self::new(ErrorCode::UserNotFound, format!("User not found: {id}"))
    }

    pub fn already_completed(task: &str) -> Self {
        Self::new(
            ErrorCode::InvalidStatusTransition,
            format!("Task \"{task}\" is already completed"),
        )
    }

    pub fn cycle_detected(key: &str) -> Self {
        Self::new(
            ErrorCode::CycleDetected,
            format!("Task '{key}' contains itself through its subtasks"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}
