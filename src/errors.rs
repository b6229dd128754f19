// src/errors.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidekickError {
    #[error("api error: {0}")]
    Api(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl SidekickError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        SidekickError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        SidekickError::Config(msg.into())
    }
}

pub type SidekickResult<T> = Result<T, SidekickError>;
