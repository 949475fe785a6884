//! Chart generation models

use std::path::PathBuf;

/// Image output settings
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub colors: Vec<(u8, u8, u8)>,
}

/// Files written by one chart run
#[derive(Debug, Default)]
pub struct ChartFiles {
    pub written: Vec<PathBuf>,
}
