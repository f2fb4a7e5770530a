#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for WriteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => WriteError::Storage(storage),
            ReadError::Other(other) => WriteError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage not available")]
    NotAvailable,
    #[error("invalid record \"{key}\": {reason}")]
    InvalidRecord { key: String, reason: String },
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("{0} already exists")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_from_read_error() {
        assert!(matches!(
            WriteError::from(ReadError::Storage(StorageError::NotAvailable)),
            WriteError::Storage(StorageError::NotAvailable)
        ));
        assert!(matches!(
            WriteError::from(ReadError::Other("foo".into())),
            WriteError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::InvalidRecord {
                key: "routines".to_string(),
                reason: "Name must not be empty".to_string()
            }
            .to_string(),
            "invalid record \"routines\": Name must not be empty"
        );
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::Conflict("name".to_string()).to_string(),
            "name already exists"
        );
    }
}
