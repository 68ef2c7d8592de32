//! Loading of source files for analysis.
//!
//! The scanner itself only sees an in-memory buffer; this module is the file
//! side of the boundary: existence and extension checks, then a full UTF-8
//! read.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    config::InputConfig,
    scanner::{ScanResult, Scanner},
    Error, InternalResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name without its directory, as shown in reports.
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn load<P: AsRef<Path>>(path: P, config: &InputConfig) -> InternalResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }
        if let Some(expected) = &config.required_extension {
            if !has_extension(path, expected) {
                return Err(Error::UnsupportedExtension {
                    path: path.to_path_buf(),
                    expected: expected.clone(),
                });
            }
        }

        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        info!("read {} ({} bytes)", name, text.len());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn scan(&self, scanner: &Scanner) -> ScanResult {
        scanner.scan(&self.text)
    }
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txt_only() -> InputConfig {
        InputConfig::default()
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entrada.txt");
        std::fs::write(&path, "<Numero>1</Numero>").unwrap();

        let source = SourceFile::load(&path, &txt_only()).unwrap();
        assert_eq!(source.name, "entrada.txt");
        assert_eq!(source.text, "<Numero>1</Numero>");
        assert!(source.scan(&Scanner::new()).is_clean());
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ENTRADA.TXT");
        std::fs::write(&path, "").unwrap();
        assert!(SourceFile::load(&path, &txt_only()).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(matches!(
            SourceFile::load(&path, &txt_only()),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entrada.csv");
        std::fs::write(&path, "SUMA").unwrap();

        match SourceFile::load(&path, &txt_only()) {
            Err(Error::UnsupportedExtension { expected, .. }) => assert_eq!(expected, "txt"),
            other => panic!("unexpected result: {:?}", other),
        }

        let any = InputConfig {
            required_extension: None,
        };
        assert_eq!(SourceFile::load(&path, &any).unwrap().text, "SUMA");
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            SourceFile::load(&path, &txt_only()),
            Err(Error::Io { .. })
        ));
    }
}
