use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] crate::graph::Error),

    #[error("Invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Entity {id} has an unrecognized group: {value:?}")]
    InvalidGroup { id: u32, value: String },

    #[error("Unknown entity: {name}")]
    UnknownEntity { name: String },
}
