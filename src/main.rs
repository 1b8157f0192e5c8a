use bus_routes::config::{CliConfig, Command, LogFormat};
use bus_routes::core::export;
use bus_routes::core::Storage;
use bus_routes::utils::error::{ErrorSeverity, GraphError};
use bus_routes::utils::{logger, validation::Validate};
use bus_routes::{LocalStorage, RouteSession, RouteShell};
use clap::Parser;
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 依錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), GraphError> {
    let session = RouteSession::new(config.build_graph()?);

    match &config.command {
        Command::Cities => {
            let summaries = session.city_summaries();
            if summaries.is_empty() {
                println!("No cities registered. Add a city to get started.");
            }
            for summary in summaries {
                println!("{} ({})", summary.name, summary.label());
            }
        }
        Command::Companies => {
            for company in session.filter_options().companies {
                println!("{}", company);
            }
        }
        Command::Routes(args) => {
            let entries = session.graph().filter_routes(&args.to_filter());
            if entries.is_empty() {
                println!("No routes match the selected filters");
            }
            for entry in &entries {
                println!("{}", entry);
            }
        }
        Command::Export(args) => {
            let entries = session.graph().filter_routes(&args.filter.to_filter());
            let rendered = export::render_routes(&entries, args.format)?;

            let storage = LocalStorage::new(args.output.clone());
            let written = storage.write_file(args.file_name(), rendered.as_bytes())?;
            tracing::info!("✅ Exported {} routes", entries.len());
            println!("📁 {} routes saved to: {}", entries.len(), written);
        }
        Command::Shell => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            let mut shell = RouteShell::new(session, stdin.lock(), std::io::stdout().lock());
            if !interactive {
                shell = shell.without_prompt();
            }
            shell.run()?;
        }
    }

    Ok(())
}
