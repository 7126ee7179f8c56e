use thiserror::Error;

/// Host-level failures. Language-level problems (unset variables, non-numeric
/// operands, division by zero) never surface here; they degrade to values.
#[derive(Error, Debug)]
pub enum Error {
    #[error("identifier `{name}` is longer than {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("out of memory")]
    OutOfMemory,

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("while loop exceeded {limit} iterations")]
    IterationLimit { limit: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
