use thiserror::Error;

/// Failures of a query against the name store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("No hay nombres disponibles.")]
    EmptyStore,

    #[error("Rango inválido.")]
    InvalidRange { from: i64, to: i64, len: usize },
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;
