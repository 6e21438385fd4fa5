use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreecatError {
    #[error("failed to write to output stream: {0}")]
    Output(#[source] std::io::Error),
}
