use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{input:?} is not a number: {source}")]
    InputParse {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("password length must be between 0 and {max}, got {requested}", max = crate::MAX_LENGTH)]
    InvalidLength { requested: i64 },
    #[error("the random number generator failed: {0}")]
    Entropy(#[from] rand::Error),
    #[error("cannot write to {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
