use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{info, warn};
use crate::config::config::{validate_density, validate_tool};
use crate::config::ports::AppConfig;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionOutput, ConversionRequest, ConversionResult};
use crate::models::error::PadError;
use crate::service::magick::MagickConverter;
use crate::service::padder::IconPadder;
use crate::service::traits::i_service::PadServiceTrait;
use crate::utils::utils::ProgressManager;

pub struct ConversionFacade {
    pad_service: Box<dyn PadServiceTrait>,
}

impl ConversionFacade {
    pub fn new(pad_service: Box<dyn PadServiceTrait>) -> Self {
        ConversionFacade { pad_service }
    }

    /// 以配置中的工具與密度建立 ImageMagick 轉換器
    pub fn from_config(config: &AppConfig) -> io::Result<Self> {
        let tool = validate_tool(&config.tool)?;
        let density = validate_density(config.density)?;
        let converter = MagickConverter::new(tool, density);
        Ok(ConversionFacade::new(Box::new(IconPadder::new(Box::new(converter)))))
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let request = ConversionRequest::new(&config.input, &config.output, config.output_size, config.padding)?;

        if !request.source_path().exists() {
            warn!("來源檔案不存在：{}", request.source_path().display());
        }

        let created = match prepare_output_dir(request.destination_path()) {
            Ok(created) => created,
            Err(e) => {
                warn!("轉換失敗：{}", e);
                return Ok(ConversionOutput { request, result: ConversionResult::Failure(e) });
            }
        };

        let pm = ProgressManager::new(
            format!("正在將 {} 轉換為 PNG", request.source_path().display()),
            config.no_progress,
        );
        let result = self.pad_service.pad(&request);
        pm.finish();

        if !result.is_success() {
            remove_created_dirs(&created);
        }

        Ok(ConversionOutput { request, result })
    }
}

/// 建立目的檔的上層目錄，回傳本次新建的目錄（由深至淺）
fn prepare_output_dir(destination: &Path) -> Result<Vec<PathBuf>, PadError> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(Vec::new()),
    };

    let missing: Vec<PathBuf> = parent
        .ancestors()
        .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        .map(Path::to_path_buf)
        .collect();
    if missing.is_empty() {
        return Ok(missing);
    }

    info!("建立輸出目錄：{}", parent.display());
    fs::create_dir_all(parent).map_err(|e| {
        remove_created_dirs(&missing);
        PadError::OutputUnavailable(format!("{}：{}", parent.display(), e))
    })?;
    Ok(missing)
}

// 只移除空目錄，失敗時忽略
fn remove_created_dirs(created: &[PathBuf]) {
    for dir in created {
        if fs::remove_dir(dir).is_ok() {
            info!("移除輸出目錄：{}", dir.display());
        }
    }
}
