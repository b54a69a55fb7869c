//! Conversion settings resolved once at startup.
//!
//! The two root directories come from the environment variables exported by
//! meson during a docs build. They are read a single time and handed to the
//! rest of the crate as an explicit [`Config`], so nothing below this module
//! performs hidden environment lookups.

use std::env;
use std::path::PathBuf;

use crate::error::{ConvertError, ConvertResult};

/// Directory holding the markdown sources.
pub const SOURCE_ROOT_VAR: &str = "MESON_SOURCE_ROOT";

/// Directory the rendered HTML is written into.
pub const BUILD_ROOT_VAR: &str = "MESON_BUILD_ROOT";

/// Fixed location of the converter binary. No `PATH` search.
pub const PANDOC_BIN: &str = "/usr/bin/pandoc";

#[derive(Clone, Debug)]
pub struct Config {
    pub source_root: PathBuf,
    pub build_root: PathBuf,
    pub pandoc: PathBuf,
}

impl Config {
    /// Build a config from the environment. Both root variables are
    /// required; there is no fallback.
    pub fn from_env() -> ConvertResult<Self> {
        Ok(Self {
            source_root: required_var(SOURCE_ROOT_VAR)?,
            build_root: required_var(BUILD_ROOT_VAR)?,
            pandoc: PathBuf::from(PANDOC_BIN),
        })
    }
}

fn required_var(name: &'static str) -> ConvertResult<PathBuf> {
    match env::var_os(name) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(ConvertError::MissingVar { name }),
    }
}
