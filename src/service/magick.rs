use std::io;
use std::process::Command;
use log::{debug, error, info};
use crate::config::config::{DEFAULT_DENSITY, DEFAULT_TOOL};
use crate::config::ports::RasterConverter;
use crate::models::conversion::ConversionRequest;
use crate::models::error::PadError;

// ImageMagick 轉換適配器
pub struct MagickConverter {
    program: String,
    density: u32,
}

impl MagickConverter {
    pub fn new(program: impl Into<String>, density: u32) -> Self {
        MagickConverter {
            program: program.into(),
            density,
        }
    }

    /// 組出 `magick convert` 的參數：透明背景、指定密度、縮放至內容尺寸、置中擴展至輸出尺寸
    pub fn build_args(&self, request: &ConversionRequest) -> Vec<String> {
        let content = request.content_size();
        let output = request.output_size();
        vec![
            "convert".to_string(),
            "-background".to_string(),
            "none".to_string(),
            "-density".to_string(),
            self.density.to_string(),
            request.source_path().to_string_lossy().to_string(),
            "-resize".to_string(),
            format!("{}x{}", content, content),
            "-gravity".to_string(),
            "center".to_string(),
            "-extent".to_string(),
            format!("{}x{}", output, output),
            request.destination_path().to_string_lossy().to_string(),
        ]
    }
}

impl Default for MagickConverter {
    fn default() -> Self {
        MagickConverter::new(DEFAULT_TOOL, DEFAULT_DENSITY)
    }
}

impl RasterConverter for MagickConverter {
    fn convert(&self, request: &ConversionRequest) -> Result<(), PadError> {
        let args = self.build_args(request);
        info!("執行 {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            error!("無法啟動 {}：{}", self.program, e);
            match e.kind() {
                io::ErrorKind::NotFound => PadError::ToolUnavailable(format!("找不到 {}", self.program)),
                _ => PadError::ToolUnavailable(format!("{}：{}", self.program, e)),
            }
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            error!("{} 結束狀態：{}，錯誤輸出：{}", self.program, output.status, stderr);
            return Err(PadError::ConversionFailed {
                status: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            debug!("{} 錯誤輸出：{}", self.program, stderr);
        }
        Ok(())
    }
}
