use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("address \"{0}\" is not registered")]
    AddressNotFound(String),
    #[error("address \"{0}\" is already registered")]
    DuplicateAddress(String),
    #[error("no edge registered between \"{0}\" and \"{1}\"")]
    EdgeNotFound(String, String),
    #[error("a goal must be set before the map can be searched")]
    GoalNotSet,
    #[error("invalid path range: {0}")]
    InvalidRange(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
