use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneCatalogError {
    #[error("failure reading zone catalog {0}: {source}")]
    CatalogReadError(String, #[source] std::io::Error),
    #[error("failure decoding zone catalog {0}: {1}")]
    CatalogDecodeError(String, String),
    #[error("unsupported zone catalog file type: {0}")]
    UnsupportedCatalogFormat(String),
    #[error("duplicate traffic zone id '{0}' in catalog")]
    DuplicateZoneId(String),
    #[error("traffic zone '{0}' has congestion percent {1} outside [0, 100]")]
    CongestionOutOfRange(String, f64),
}
