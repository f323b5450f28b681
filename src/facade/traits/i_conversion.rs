use std::io;
use crate::config::ports::AppConfig;
use crate::models::conversion::ConversionOutput;

// Facade 接口，負責協調圖示轉換流程
pub trait ConversionFacadeTrait {
    /// 依配置建立轉換請求並執行一次轉換
    /// # 參數
    /// - config: 已解析的應用配置
    /// # 回傳
    /// - 成功或失敗的轉換結果；配置無效時返回 IO 錯誤（InvalidInput）
    fn execute_conversion(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}
