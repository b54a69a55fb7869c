use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Config = 1,
    InvalidArguments = 2,
    Launch = 3,
    Conversion = 4,
}

impl ExitCode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            1 => Some(Self::Config),
            2 => Some(Self::InvalidArguments),
            3 => Some(Self::Launch),
            4 => Some(Self::Conversion),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("required environment variable {name} is not set")]
    MissingVar { name: &'static str },

    #[error("invalid document name '{0}'")]
    InvalidName(String),

    #[error("failed to launch {}: {source}", .program.display())]
    Launch { program: PathBuf, source: io::Error },
}

impl ConvertError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingVar { .. } => ExitCode::Config,
            Self::InvalidName(_) => ExitCode::InvalidArguments,
            Self::Launch { .. } => ExitCode::Launch,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
