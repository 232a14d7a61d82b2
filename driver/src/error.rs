use error_stack::Report;

use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    SqlX(sqlx::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Conversion(anyhow::Error),
}

impl From<sqlx::Error> for DriverError {
    fn from(value: sqlx::Error) -> Self {
        Self::SqlX(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::from(error).change_context(KernelError::Internal))
    }
}
