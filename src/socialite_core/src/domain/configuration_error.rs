use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// The disambiguating suffix would add no entropy, so collisions could never resolve.
    #[error(
        "Username max length {max_length} leaves no room for a {uuid_length}-character unique suffix"
    )]
    InsufficientEntropy {
        max_length: usize,
        uuid_length: usize,
    },
}
