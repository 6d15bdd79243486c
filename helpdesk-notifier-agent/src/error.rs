#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("notification display failed: {0}")]
    Display(#[source] anyhow::Error),

    #[error("worker scope operation failed: {0}")]
    Scope(#[source] anyhow::Error),

    #[error("delivery agent closed")]
    Closed,
}
