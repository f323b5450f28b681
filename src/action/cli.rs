use std::io;
use std::path::PathBuf;
use clap::error::ErrorKind;
use clap::Parser;
use crate::action::interactive::InteractiveConfigAdapter;
use crate::config::config::{Cli, DEFAULT_DENSITY, DEFAULT_OUTPUT_SIZE, DEFAULT_PADDING, DEFAULT_TOOL};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{compute_content_size, ConversionOutput, ConversionResult};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::{format_success_report, manual_instructions, setup_logging};

/// 解析命令列並執行一次轉換，回傳程序結束代碼
pub fn process_args(args: Vec<String>) -> io::Result<u8> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string())),
        },
    };
    setup_logging(&cli.log_level)?;

    // 選擇配置適配器
    let config_port: Box<dyn ConfigPort> = if cli.interactive {
        Box::new(InteractiveConfigAdapter::new(CliConfigAdapter::new(cli.clone()).get_config()?))
    } else if cli.uses_defaults() {
        log::info!("未提供轉換參數，使用預設配置：{} → {}", cli.input, cli.output);
        Box::new(DefaultConfigAdapter::new().no_progress(cli.no_progress))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    compute_content_size(config.output_size, config.padding)?;
    println!("正在嘗試使用 ImageMagick 將 {} 轉換為 PNG...", config.input.display());
    let facade = ConversionFacade::from_config(&config)?;
    let output = facade.execute_conversion(config)?;
    Ok(report(&output))
}

/// 印出成功摘要或手動轉換說明
pub fn report(output: &ConversionOutput) -> u8 {
    match &output.result {
        ConversionResult::Success { .. } => println!("{}", format_success_report(&output.request)),
        ConversionResult::Failure(reason) => println!("{}", manual_instructions(&output.request, reason)),
    }
    output.result.exit_code()
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let config = AppConfig {
            input: PathBuf::from(&self.cli.input),
            output: PathBuf::from(&self.cli.output),
            output_size: self.cli.size.unwrap_or(DEFAULT_OUTPUT_SIZE),
            padding: self.cli.padding.unwrap_or(DEFAULT_PADDING),
            density: self.cli.density.unwrap_or(DEFAULT_DENSITY),
            tool: self.cli.tool.clone().unwrap_or_else(|| DEFAULT_TOOL.to_string()),
            no_progress: self.cli.no_progress,
        };
        log::info!(
            "使用自訂配置：input={}, output={}, size={}, padding={}, density={}, tool={}",
            config.input.display(),
            config.output.display(),
            config.output_size,
            config.padding,
            config.density,
            config.tool
        );
        Ok(config)
    }
}
