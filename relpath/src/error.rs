use std::io;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("destination `{path}` has to be a file path, but is a directory")]
    InvalidDestinationKind { path: String },
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidDestinationKind { .. } => {
                io::Error::new(io::ErrorKind::IsADirectory, err)
            }
        }
    }
}
