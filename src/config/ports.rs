use std::io;
use std::path::PathBuf;
use crate::models::conversion::ConversionRequest;
use crate::models::error::PadError;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub output_size: u32,
    pub padding: f64,
    pub density: u32,
    pub tool: String,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 向量轉點陣能力的 Port，測試時可替換為替身
pub trait RasterConverter {
    /// 依請求將來源 SVG 轉換為目的 PNG，只嘗試一次
    fn convert(&self, request: &ConversionRequest) -> Result<(), PadError>;
}
