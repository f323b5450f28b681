use std::fmt;
use std::io;

// 圖示轉換過程中的錯誤種類，皆不可在同一次執行中恢復
#[derive(Debug, Clone, PartialEq)]
pub enum PadError {
    /// 邊距比例或輸出尺寸不合法
    InvalidConfiguration(String),
    /// 找不到外部轉換工具，或無法啟動
    ToolUnavailable(String),
    /// 無法建立輸出目錄
    OutputUnavailable(String),
    /// 外部工具已執行但回傳非零狀態
    ConversionFailed { status: Option<i32>, stderr: String },
}

impl fmt::Display for PadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadError::InvalidConfiguration(msg) => write!(f, "配置無效：{}", msg),
            PadError::ToolUnavailable(msg) => write!(f, "轉換工具無法使用：{}", msg),
            PadError::OutputUnavailable(msg) => write!(f, "無法寫入輸出位置：{}", msg),
            PadError::ConversionFailed { status, stderr } => {
                match status {
                    Some(code) => write!(f, "轉換失敗，結束代碼：{}", code)?,
                    None => write!(f, "轉換失敗，程序被訊號中止")?,
                }
                if !stderr.is_empty() {
                    write!(f, "（{}）", stderr)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for PadError {}

impl From<PadError> for io::Error {
    fn from(err: PadError) -> Self {
        let kind = match err {
            PadError::InvalidConfiguration(_) => io::ErrorKind::InvalidInput,
            PadError::ToolUnavailable(_) => io::ErrorKind::NotFound,
            PadError::OutputUnavailable(_) => io::ErrorKind::Other,
            PadError::ConversionFailed { .. } => io::ErrorKind::Other,
        };
        io::Error::new(kind, err.to_string())
    }
}
