use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("Too many variables (limit is {limit})")]
    TooManyVariables { limit: usize },

    #[error("{keyword} needs {expected}")]
    MissingArgument {
        keyword: &'static str,
        expected: &'static str,
    },

    #[error("Expected a variable name, got {token:?}")]
    NotAnIdentifier { token: String },

    #[error("Invalid statement: {text:?}")]
    InvalidStatement { text: String },
}

pub type CompileResult<T> = Result<T, CompileError>;
