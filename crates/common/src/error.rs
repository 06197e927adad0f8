/// Erros do store ambiente chave-valor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("quota de armazenamento excedida")]
    QuotaExceeded,
    #[error("store indisponível: {0}")]
    Unavailable(String),
}

/// Erro top-level do Webstash.
#[derive(Debug, thiserror::Error)]
pub enum StashError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("falha de serialização: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Result type alias.
pub type StashResult<T> = Result<T, StashError>;
