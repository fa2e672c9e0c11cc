use crate::contour::ContourOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ImageToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub binarize: BinarizeConfig,
    #[serde(default)]
    pub contour: ContourOptions,
    pub output: ImageOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BinarizeConfig {
    /// Luma level separating background from foreground.
    pub threshold: u8,
    /// Treat dark pixels as foreground.
    pub invert: bool,
    /// Background cells added around the image so objects touching the
    /// picture edge are still seeded from the interior.
    pub border: usize,
}

impl Default for BinarizeConfig {
    fn default() -> Self {
        Self {
            threshold: 128,
            invert: false,
            border: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    #[serde(default)]
    pub debug_mask: Option<PathBuf>,
}

pub fn parse_config(data: &str) -> Result<ImageToolConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<ImageToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
