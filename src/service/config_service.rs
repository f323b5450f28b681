use std::io;
use std::path::PathBuf;
use crate::config::config::{
    DEFAULT_DENSITY, DEFAULT_DESTINATION, DEFAULT_OUTPUT_SIZE, DEFAULT_PADDING, DEFAULT_SOURCE, DEFAULT_TOOL,
};
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責包裝選定的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：固定路徑、1024px、10% 邊距、300 DPI
pub struct DefaultConfigAdapter {
    input: PathBuf,
    output: PathBuf,
    no_progress: bool,
}

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter {
            input: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_DESTINATION),
            no_progress: false,
        }
    }

    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        DefaultConfigAdapter {
            input: input.into(),
            output: output.into(),
            no_progress: false,
        }
    }

    pub fn no_progress(mut self, no_progress: bool) -> Self {
        self.no_progress = no_progress;
        self
    }
}

impl Default for DefaultConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            output_size: DEFAULT_OUTPUT_SIZE,
            padding: DEFAULT_PADDING,
            density: DEFAULT_DENSITY,
            tool: DEFAULT_TOOL.to_string(),
            no_progress: self.no_progress,
        })
    }
}
