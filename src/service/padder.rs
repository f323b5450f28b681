use log::{info, warn};
use crate::config::ports::RasterConverter;
use crate::models::conversion::{ConversionRequest, ConversionResult};
use crate::service::traits::i_service::PadServiceTrait;

pub struct IconPadder {
    converter: Box<dyn RasterConverter>,
}

impl IconPadder {
    pub fn new(converter: Box<dyn RasterConverter>) -> Self {
        IconPadder { converter }
    }
}

impl PadServiceTrait for IconPadder {
    fn pad(&self, request: &ConversionRequest) -> ConversionResult {
        info!(
            "轉換 {} → {}，輸出 {}px，內容 {}px",
            request.source_path().display(),
            request.destination_path().display(),
            request.output_size(),
            request.content_size()
        );

        match self.converter.convert(request) {
            Ok(()) => ConversionResult::Success {
                output_path: request.destination_path().to_path_buf(),
                output_size: request.output_size(),
                content_size: request.content_size(),
            },
            Err(e) => {
                warn!("轉換失敗：{}", e);
                ConversionResult::Failure(e)
            }
        }
    }
}
