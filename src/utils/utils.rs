use std::io;
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use crate::models::conversion::ConversionRequest;
use crate::models::error::PadError;

pub const IMAGEMAGICK_DOWNLOAD_URL: &str = "https://imagemagick.org/script/download.php";

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    if let Err(e) = env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
    {
        // 已初始化時沿用既有的日誌設定
        log::debug!("略過日誌初始化：{}", e);
    }
    Ok(())
}

// 外部工具執行期間的轉圈提示
pub struct ProgressManager {
    pb: ProgressBar,
}

impl ProgressManager {
    pub fn new(message: String, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
                pb.set_style(style);
            }
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        pb.set_message(message);
        ProgressManager { pb }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

pub fn format_padding_percent(padding: f64) -> String {
    format!("{}%", (padding * 100.0).floor())
}

pub fn format_success_report(request: &ConversionRequest) -> String {
    let size = request.output_size();
    let content = request.content_size();
    format!(
        "✓ 成功轉換至 {}\n  尺寸：{}x{}px\n  內容尺寸：{}x{}px（{} 邊距）",
        request.destination_path().display(),
        size,
        size,
        content,
        content,
        format_padding_percent(request.padding_fraction())
    )
}

/// 轉換失敗時的手動轉換說明
pub fn manual_instructions(request: &ConversionRequest, reason: &PadError) -> String {
    let source_name = request
        .source_path()
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| request.source_path().display().to_string());
    let size = request.output_size();

    let lines = vec![
        String::new(),
        "⚠ 找不到 ImageMagick 或轉換失敗。".to_string(),
        format!("  原因：{}", reason),
        String::new(),
        format!("請手動將 {} 轉換為 PNG：", source_name),
        format!("1. 以向量繪圖軟體（Inkscape、GIMP 等）開啟 {}", source_name),
        format!(
            "2. 匯出為 {}x{}px 的 PNG，並保留 {} 邊距",
            size,
            size,
            format_padding_percent(request.padding_fraction())
        ),
        format!("3. 儲存為 {}", request.destination_path().display()),
        String::new(),
        format!("或安裝 ImageMagick：{}", IMAGEMAGICK_DOWNLOAD_URL),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ConversionRequest {
        ConversionRequest::new("assets/icon/icon.svg", "assets/icon/icon.png", 1024, 0.1).unwrap()
    }

    #[test]
    fn success_report_lists_sizes() {
        let report = format_success_report(&request());
        assert!(report.contains("assets/icon/icon.png"));
        assert!(report.contains("1024x1024px"));
        assert!(report.contains("819x819px"));
        assert!(report.contains("10%"));
    }

    #[test]
    fn instructions_for_missing_tool_include_download_link() {
        let text = manual_instructions(&request(), &PadError::ToolUnavailable("找不到 magick".to_string()));
        assert!(text.contains("icon.svg"));
        assert!(text.contains("1024x1024px"));
        assert!(text.contains("assets/icon/icon.png"));
        assert!(text.contains(IMAGEMAGICK_DOWNLOAD_URL));
    }

    #[test]
    fn instructions_for_failed_conversion_include_reason() {
        let reason = PadError::ConversionFailed { status: Some(1), stderr: "bad svg".to_string() };
        let text = manual_instructions(&request(), &reason);
        assert!(text.contains("assets/icon/icon.png"));
        assert!(text.contains("bad svg"));
    }

    #[test]
    fn padding_percent_is_truncated() {
        assert_eq!(format_padding_percent(0.1), "10%");
        assert_eq!(format_padding_percent(0.129), "12%");
        assert_eq!(format_padding_percent(0.0), "0%");
    }

    #[test]
    fn logging_setup_can_run_twice() {
        assert!(setup_logging("warn").is_ok());
        assert!(setup_logging("info").is_ok());
    }

    #[test]
    fn hidden_progress_finishes_quietly() {
        let pm = ProgressManager::new("轉換中".to_string(), true);
        pm.finish();
    }
}
