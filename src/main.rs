use std::process::ExitCode;

use icon_padder::action::cli::process_args;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(code) => {
            log::info!("程式執行完成，結束代碼：{}", code);
            ExitCode::from(code)
        }
        Err(e) => {
            log::error!("程式執行失敗：{}", e);
            eprintln!("錯誤：{}", e);
            ExitCode::from(1)
        }
    }
}
