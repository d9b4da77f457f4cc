use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input could not be parsed")]
    NoParse,
    #[error("Unconsumed input at offset {offset}: {remainder:?}")]
    TrailingInput { offset: usize, remainder: String },
    // io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// エラー作成用のヘルパー関数
impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
