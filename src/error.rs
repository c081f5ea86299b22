pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    User(#[from] UserError),

    #[error("serde_json error")]
    SerdeJSON(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("unknown auth strategy {name:?}")]
    UnknownAuthStrategy { name: String },

    #[error("unknown model operation {name:?}")]
    UnknownModelOperation { name: String },
}
