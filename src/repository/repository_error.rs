use std::fmt;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound(String),
    ReferenceViolation(String),
    ValidationError(String),
    DatabaseError(String),
    ConnectionError(String),
    /// Generic error that wraps any error implementing std::error::Error
    Generic(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            RepositoryError::ReferenceViolation(msg) => write!(f, "Reference Violation: {}", msg),
            RepositoryError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            RepositoryError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            RepositoryError::ConnectionError(msg) => write!(f, "Connection Error: {}", msg),
            RepositoryError::Generic(err) => write!(f, "Repository Error: {}", err),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Generic(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

// Convenient constructors
impl RepositoryError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        RepositoryError::NotFound(msg.into())
    }

    pub fn reference<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ReferenceViolation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ValidationError(msg.into())
    }

    pub fn database<T: Into<String>>(msg: T) -> Self {
        RepositoryError::DatabaseError(msg.into())
    }

    pub fn connection<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ConnectionError(msg.into())
    }

    pub fn generic<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RepositoryError::Generic(Box::new(err))
    }
}

// Postgres-specific conversions. Foreign key violations (SQLSTATE 23503)
// surface as ReferenceViolation so blocked deletes and dangling creates are
// classified as conflicts even when the explicit checks were raced past.
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                RepositoryError::NotFound("Record not found".to_string())
            }
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23503") => RepositoryError::ReferenceViolation(format!(
                    "Foreign key constraint violated: {}",
                    db_err.message()
                )),
                Some("23514") => RepositoryError::ValidationError(format!(
                    "Check constraint violated: {}",
                    db_err.message()
                )),
                _ => RepositoryError::DatabaseError(format!("Database error: {}", db_err)),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                RepositoryError::ConnectionError(format!("Connection error: {}", err))
            }
            _ => RepositoryError::DatabaseError(format!("Database error: {}", err)),
        }
    }
}

// Result type alias for convenience
pub type RepositoryResult<T> = Result<T, RepositoryError>;
