use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use crate::{report::ReportFormat, Error, InternalResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicoConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Extension (without the dot) a source file must carry; `None` accepts any file.
    #[serde(default = "default_required_extension")]
    pub required_extension: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            required_extension: default_required_extension(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_token_report")]
    pub token_report: String,

    #[serde(default = "default_error_report")]
    pub error_report: String,

    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            token_report: default_token_report(),
            error_report: default_error_report(),
            format: ReportFormat::default(),
        }
    }
}

impl LexicoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Reads `path` when it exists, otherwise falls back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::from_file(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

fn default_required_extension() -> Option<String> {
    Some("txt".to_string())
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_token_report() -> String {
    "reporte_tokens.html".to_string()
}

fn default_error_report() -> String {
    "reporte_errores.html".to_string()
}
