use dialoguer::{Confirm, Input};
use std::io;
use std::path::PathBuf;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::conversion::compute_content_size;

pub fn get_input_path(default: &str) -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入 SVG 圖示路徑")
        .default(default.to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸入路徑讀取失敗: {}", e)))
}

pub fn get_output_path(default: &str) -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入 PNG 輸出路徑")
        .default(default.to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出路徑讀取失敗: {}", e)))
}

pub fn get_output_size(default: u32) -> io::Result<u32> {
    Input::new()
        .with_prompt("輸出尺寸（正方形邊長，像素）")
        .default(default)
        .validate_with(|size: &u32| -> Result<(), String> {
            if *size > 0 { Ok(()) } else { Err("輸出尺寸必須大於 0".to_string()) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出尺寸讀取失敗: {}", e)))
}

pub fn get_padding(default: f64, output_size: u32) -> io::Result<f64> {
    Input::new()
        .with_prompt("單側邊距比例（0 ≤ 比例 < 0.5，例如 0.1 = 10%）")
        .default(default)
        .validate_with(move |padding: &f64| -> Result<(), String> {
            compute_content_size(output_size, *padding).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("邊距比例讀取失敗: {}", e)))
}

pub fn get_density(default: u32) -> io::Result<u32> {
    Input::new()
        .with_prompt("柵格化密度（DPI）")
        .default(default)
        .validate_with(|density: &u32| -> Result<(), String> {
            if *density > 0 { Ok(()) } else { Err("柵格化密度必須大於 0".to_string()) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("密度讀取失敗: {}", e)))
}

pub fn get_confirmation(config: &AppConfig) -> io::Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "將 {} 轉換為 {}（{}px，{} 邊距），是否繼續？",
            config.input.display(),
            config.output.display(),
            config.output_size,
            config.padding
        ))
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("確認選項輸入失敗: {}", e)))
}

// 交互配置適配器，以既有配置作為各提示的預設值
pub struct InteractiveConfigAdapter {
    base: AppConfig,
}

impl InteractiveConfigAdapter {
    pub fn new(base: AppConfig) -> Self {
        InteractiveConfigAdapter { base }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        println!("=== 歡迎使用互動模式 ===");
        let input = get_input_path(&self.base.input.to_string_lossy())?;
        let output = get_output_path(&self.base.output.to_string_lossy())?;
        let output_size = get_output_size(self.base.output_size)?;
        let padding = get_padding(self.base.padding, output_size)?;
        let density = get_density(self.base.density)?;

        let config = AppConfig {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            output_size,
            padding,
            density,
            tool: self.base.tool.clone(),
            no_progress: self.base.no_progress,
        };

        if !get_confirmation(&config)? {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "使用者取消轉換"));
        }
        Ok(config)
    }
}
