use crate::models::conversion::{ConversionRequest, ConversionResult};

// 圖示邊距服務接口，負責單次轉換
pub trait PadServiceTrait {
    /// 計算內容尺寸並呼叫轉換器產生帶邊距的 PNG
    /// # 參數
    /// - request: 已驗證的轉換請求
    /// # 回傳
    /// - 成功時返回輸出路徑與尺寸，失敗時返回原因；不會重試
    fn pad(&self, request: &ConversionRequest) -> ConversionResult;
}
