/// Errors that can occur while building compose inputs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ComposeError {
    #[error("invalid realm URL: {0}")]
    RealmUrl(#[from] url::ParseError),
}
