use std::fmt::Display;

use error_stack::Context;

use crate::entity::ScooterId;

#[derive(Debug)]
pub enum KernelError {
    ScooterNotFound { id: ScooterId },
    DuplicateScooter { id: ScooterId },
    InvalidOperation { id: ScooterId },
    InvalidRange,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::ScooterNotFound { id } => {
                write!(f, "Scooter with ID: {} not found", id.as_ref())
            }
            KernelError::DuplicateScooter { id } => {
                write!(f, "Scooter with ID: {} already exists", id.as_ref())
            }
            KernelError::InvalidOperation { id } => {
                write!(
                    f,
                    "Attempting invalid operation on scooter with ID: {}",
                    id.as_ref()
                )
            }
            KernelError::InvalidRange => {
                write!(f, "Rental start is later than its effective end")
            }
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
