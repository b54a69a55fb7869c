use std::process::Command;

use crate::config::Config;
use crate::error::{ConvertError, ConvertResult};
use crate::paths::{ConversionPaths, DocumentName};

/// Outcome of one converter run: exit status plus both captured streams.
///
/// A non-zero status is not an error of the wrapper itself; callers decide
/// what to do with the report.
#[derive(Debug)]
pub struct ConversionReport {
    /// Child exit status, `None` when the child was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ConversionReport {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Two-line failure diagnostic: status first, captured streams second.
    pub fn diagnostic(&self) -> String {
        let status = match self.status {
            Some(code) => format!("pandoc failed with status {code}"),
            None => "pandoc was terminated by a signal".to_string(),
        };
        format!("{status}\nstdout: {} stderr: {}\n", self.stdout, self.stderr)
    }
}

/// Argument vector fixed by the converter contract:
/// `-f markdown -s <input> -o <output>`.
pub fn build_command(config: &Config, paths: &ConversionPaths) -> Command {
    let mut command = Command::new(&config.pandoc);
    command
        .arg("-f")
        .arg("markdown")
        .arg("-s")
        .arg(&paths.input)
        .arg("-o")
        .arg(&paths.output);
    command
}

/// Resolve paths for `name` and run the converter to completion.
pub fn convert(config: &Config, name: &DocumentName) -> ConvertResult<ConversionReport> {
    let paths = ConversionPaths::resolve(config, name);
    run(config, &paths)
}

/// Spawn the converter and block until it exits, capturing both streams.
pub fn run(config: &Config, paths: &ConversionPaths) -> ConvertResult<ConversionReport> {
    let output = build_command(config, paths)
        .output()
        .map_err(|source| ConvertError::Launch {
            program: config.pandoc.clone(),
            source,
        })?;

    Ok(ConversionReport {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
