use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("node {0:?} is not in the graph")]
    NodeNotFound(String),
    #[error("no edge between {from:?} and {to:?}")]
    MissingEdge { from: String, to: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn missing_edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::MissingEdge {
            from: from.into(),
            to: to.into(),
        }
    }
}
