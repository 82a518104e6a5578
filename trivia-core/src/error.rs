use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No candidate questions in the requested pool")]
    NoCandidates,

    #[error("Database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(feature = "database")]
impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        CoreError::Database(err.to_string())
    }
}
