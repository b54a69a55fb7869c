use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ConvertError, ConvertResult};

/// A document name reduced to its final path component, no extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentName(String);

impl DocumentName {
    /// Strip any directory components from `raw` and keep the bare name.
    /// A name with nothing left after stripping is rejected.
    pub fn parse(raw: &str) -> ConvertResult<Self> {
        match Path::new(raw).file_name().and_then(|name| name.to_str()) {
            Some(name) if !name.is_empty() => Ok(Self(name.to_string())),
            _ => Err(ConvertError::InvalidName(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Input and output file locations for one conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionPaths {
    /// `<source_root>/<name>.md` and `<build_root>/<name>.html`. The input
    /// file is not checked for existence here; a missing source surfaces
    /// through the converter's own failure.
    pub fn resolve(config: &Config, name: &DocumentName) -> Self {
        Self {
            input: config.source_root.join(format!("{}.md", name.as_str())),
            output: config.build_root.join(format!("{}.html", name.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(source: &str, build: &str) -> Config {
        Config {
            source_root: PathBuf::from(source),
            build_root: PathBuf::from(build),
            pandoc: PathBuf::from("/usr/bin/pandoc"),
        }
    }

    #[test]
    fn resolves_input_and_output_under_their_roots() {
        let config = config("/home/work", "/home/work/meson_bld");
        let name = DocumentName::parse("README").unwrap();

        let paths = ConversionPaths::resolve(&config, &name);
        assert_eq!(paths.input, PathBuf::from("/home/work/README.md"));
        assert_eq!(
            paths.output,
            PathBuf::from("/home/work/meson_bld/README.html")
        );
    }

    #[test]
    fn strips_directory_components_from_the_argument() {
        let name = DocumentName::parse("docs/README").unwrap();
        assert_eq!(name.as_str(), "README");

        let name = DocumentName::parse("/abs/path/to/NOTES").unwrap();
        assert_eq!(name.as_str(), "NOTES");
    }

    #[test]
    fn keeps_an_existing_extension_as_part_of_the_name() {
        let config = config("/src", "/bld");
        let name = DocumentName::parse("README.md").unwrap();

        let paths = ConversionPaths::resolve(&config, &name);
        assert_eq!(paths.input, PathBuf::from("/src/README.md.md"));
        assert_eq!(paths.output, PathBuf::from("/bld/README.md.html"));
    }

    #[test]
    fn rejects_names_with_no_final_component() {
        assert!(DocumentName::parse("").is_err());
        assert!(DocumentName::parse("..").is_err());
        assert!(DocumentName::parse("/").is_err());
    }
}
