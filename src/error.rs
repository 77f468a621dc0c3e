use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("A required collaborator is not configured: {0}")]
    MissingCollaborator(&'static str),
    #[error("Unknown scene: {0}")]
    UnknownScene(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;

impl From<GameError> for std::io::Error {
    fn from(error: GameError) -> Self {
        match error {
            GameError::Io(inner) => inner,
            other => std::io::Error::new(std::io::ErrorKind::Other, other.to_string()),
        }
    }
}
