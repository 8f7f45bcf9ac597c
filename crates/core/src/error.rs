#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no record named {0} in the record book")]
    RecordNotFound(String),
    #[error("a patient named {0} already exists in the record book")]
    DuplicateRecord(String),
    #[error("failed to read seed file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
