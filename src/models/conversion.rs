use std::path::{Path, PathBuf};
use crate::models::error::PadError;

/// 轉換請求，建立後不可變更
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    source_path: PathBuf,
    destination_path: PathBuf,
    output_size: u32,
    padding_fraction: f64,
    content_size: u32,
}

impl ConversionRequest {
    /// 驗證尺寸與邊距比例並預先計算內容尺寸
    pub fn new(
        source_path: impl Into<PathBuf>,
        destination_path: impl Into<PathBuf>,
        output_size: u32,
        padding_fraction: f64,
    ) -> Result<Self, PadError> {
        let content_size = compute_content_size(output_size, padding_fraction)?;
        Ok(ConversionRequest {
            source_path: source_path.into(),
            destination_path: destination_path.into(),
            output_size,
            padding_fraction,
            content_size,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn destination_path(&self) -> &Path {
        &self.destination_path
    }

    pub fn output_size(&self) -> u32 {
        self.output_size
    }

    pub fn padding_fraction(&self) -> f64 {
        self.padding_fraction
    }

    pub fn content_size(&self) -> u32 {
        self.content_size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResult {
    Success {
        output_path: PathBuf,
        output_size: u32,
        content_size: u32,
    },
    Failure(PadError),
}

// Facade 輸出：請求本身與其結果，供回報使用
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub request: ConversionRequest,
    pub result: ConversionResult,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success { .. })
    }

    /// 程序結束代碼：成功為 0，失敗為 1
    pub fn exit_code(&self) -> u8 {
        match self {
            ConversionResult::Success { .. } => 0,
            ConversionResult::Failure(_) => 1,
        }
    }
}

/// 依輸出尺寸與單側邊距比例計算置中內容的邊長：
/// `floor(output_size * (1 - 2 * padding_fraction))`
pub fn compute_content_size(output_size: u32, padding_fraction: f64) -> Result<u32, PadError> {
    if output_size == 0 {
        return Err(PadError::InvalidConfiguration("輸出尺寸必須大於 0".to_string()));
    }
    if !(0.0..0.5).contains(&padding_fraction) {
        return Err(PadError::InvalidConfiguration(format!(
            "邊距比例必須介於 [0, 0.5) 之間，目前為 {}",
            padding_fraction
        )));
    }

    let content_size = (output_size as f64 * (1.0 - 2.0 * padding_fraction)).floor() as u32;
    if content_size == 0 {
        return Err(PadError::InvalidConfiguration(format!(
            "輸出尺寸 {} 搭配邊距比例 {} 後內容尺寸為 0",
            output_size, padding_fraction
        )));
    }
    Ok(content_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_padding_on_1024() {
        assert_eq!(compute_content_size(1024, 0.1), Ok(819));
    }

    #[test]
    fn zero_padding_keeps_full_size() {
        for size in [1, 16, 512, 1024, 4096] {
            assert_eq!(compute_content_size(size, 0.0), Ok(size));
        }
    }

    #[test]
    fn rejects_padding_out_of_range() {
        for padding in [0.5, 0.75, 1.0, -0.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                compute_content_size(1024, padding),
                Err(PadError::InvalidConfiguration(_))
            ), "padding {} should be rejected", padding);
        }
    }

    #[test]
    fn rejects_zero_output_size() {
        assert!(matches!(
            compute_content_size(0, 0.1),
            Err(PadError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_empty_content() {
        assert!(matches!(
            compute_content_size(1, 0.4),
            Err(PadError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn content_stays_within_canvas() {
        let paddings = [0.0, 0.01, 0.1, 0.125, 0.25, 0.33, 0.49, 0.499];
        for size in (1..=2048).step_by(7) {
            for &padding in &paddings {
                if let Ok(content) = compute_content_size(size, padding) {
                    let expected = (size as f64 * (1.0 - 2.0 * padding)).floor() as u32;
                    assert_eq!(content, expected);
                    assert!(content > 0 && content <= size, "size {} padding {}", size, padding);
                }
            }
        }
    }

    #[test]
    fn request_keeps_computed_sizes() {
        let request = ConversionRequest::new("icon.svg", "icon.png", 1024, 0.1).unwrap();
        assert_eq!(request.content_size(), 819);
        assert_eq!(request.output_size(), 1024);
        assert_eq!(request.destination_path(), Path::new("icon.png"));
    }

    #[test]
    fn exit_codes() {
        let ok = ConversionResult::Success {
            output_path: PathBuf::from("icon.png"),
            output_size: 1024,
            content_size: 819,
        };
        let failed = ConversionResult::Failure(PadError::ToolUnavailable("magick".to_string()));
        assert_eq!(ok.exit_code(), 0);
        assert_eq!(failed.exit_code(), 1);
        assert!(ok.is_success());
        assert!(!failed.is_success());
    }
}
