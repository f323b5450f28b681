use clap::Parser;
use std::io;

pub const DEFAULT_SOURCE: &str = "assets/icon/icon.svg";
pub const DEFAULT_DESTINATION: &str = "assets/icon/icon.png";
pub const DEFAULT_OUTPUT_SIZE: u32 = 1024;
pub const DEFAULT_PADDING: f64 = 0.1;
pub const DEFAULT_DENSITY: u32 = 300;
pub const DEFAULT_TOOL: &str = "magick";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "icon_padder",
    about = "將 SVG 圖示轉換為帶有透明邊距的正方形 PNG",
    long_about = "透過 ImageMagick 將 SVG 圖示柵格化，縮放至內容尺寸後置中放入正方形畫布。\n不帶參數時使用預設路徑 assets/icon/icon.svg → assets/icon/icon.png、1024px、10% 邊距。\n若找不到 ImageMagick 或轉換失敗，會列出手動轉換步驟並以代碼 1 結束。"
)]
pub struct Cli {
    #[arg(default_value = DEFAULT_SOURCE)]
    pub input: String,
    #[arg(short, long, default_value = DEFAULT_DESTINATION)]
    pub output: String,
    #[arg(long)]
    pub size: Option<u32>,
    #[arg(long)]
    pub padding: Option<f64>,
    #[arg(long)]
    pub density: Option<u32>,
    #[arg(long)]
    pub tool: Option<String>,
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
    #[arg(long, default_value = "warn", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

impl Cli {
    /// 是否僅使用預設值（未指定任何轉換選項）
    pub fn uses_defaults(&self) -> bool {
        self.input == DEFAULT_SOURCE
            && self.output == DEFAULT_DESTINATION
            && self.size.is_none()
            && self.padding.is_none()
            && self.density.is_none()
            && self.tool.is_none()
    }
}

pub fn validate_density(density: u32) -> io::Result<u32> {
    if density == 0 {
        log::error!("柵格化密度必須大於 0");
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "柵格化密度必須大於 0",
        ));
    }
    Ok(density)
}

pub fn validate_tool(tool: &str) -> io::Result<&str> {
    if tool.trim().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "轉換工具名稱不可為空"));
    }
    Ok(tool)
}
