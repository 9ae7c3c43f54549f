use anyhow::Context;
use clap::Parser;
use ui_splitter::utils::{logger, validation::Validate};
use ui_splitter::{convert, CliConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::debug!("CLI config: {:?}", cli);

    let config = cli
        .resolve()
        .context("failed to locate the executable directory for default paths")?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    println!("Converting: {}", config.input_path.display());
    println!("Output directory: {}", config.output_dir.display());
    println!("{}", "-".repeat(50));

    if convert(&config.input_path, &config.output_dir) {
        println!("\n🎉 Conversion successful!");
        Ok(())
    } else {
        println!("\n❌ Conversion failed!");
        std::process::exit(1);
    }
}
