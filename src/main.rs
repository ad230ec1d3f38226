use anyhow::Context;
use clap::Parser;
use math_calc::utils::{logger, validation::Validate};
use math_calc::{CalcError, CliConfig, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with_config_error(&e);
    }
    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with_config_error(&e),
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = Session::new(settings);

    // Arithmetic and input errors are reported by the session itself; only I/O gets here.
    session
        .run(&mut stdin.lock(), &mut stdout.lock())
        .context("calculator session failed")?;

    Ok(())
}

fn exit_with_config_error(e: &CalcError) -> ! {
    eprintln!("❌ Configuration validation failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}
