use crate::render;
use common::messages::Response;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Error writing to the terminal: {0}")]
    Io(#[from] io::Error),
    #[error("Error serializing message: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait SendMsg {
    fn send(&self, msg: &Response) -> Result<(), SendError>;
}

// Where responses go: a drawn board for people, JSON lines for scripts
#[derive(Debug, Clone, Copy)]
pub enum Client {
    Text,
    Json,
}

impl SendMsg for Client {
    fn send(&self, msg: &Response) -> Result<(), SendError> {
        let line = match self {
            Client::Text => render::response(msg),
            Client::Json => serde_json::to_string(msg)?,
        };
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}
