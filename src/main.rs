use clap::Parser;
use employee_facade::core::ConfigProvider;
use employee_facade::utils::{logger, validation::Validate};
use employee_facade::{
    employee_routes, CliConfig, EmployeeFacade, HttpEmployeeSource, InMemoryEmployeeSource,
    TomlConfig,
};
use std::sync::Arc;

fn load_config(cli: &CliConfig) -> employee_facade::Result<Box<dyn ConfigProvider>> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(Box::new(config))
        }
        None => {
            cli.validate()?;
            Ok(Box::new(cli.clone()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting employee-facade");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let retry = config.retry_config();
    tracing::info!(
        "Retry policy: {} attempts, backoff {:?}",
        retry.max_attempts,
        retry.backoff
    );

    let app = if cli.in_memory {
        tracing::info!("Serving seeded in-memory employees");
        employee_routes(Arc::new(EmployeeFacade::new(
            InMemoryEmployeeSource::seeded(),
            retry,
        )))
    } else {
        let source = HttpEmployeeSource::from_config(config.as_ref())?;
        tracing::info!("Upstream employee API: {}", source.base_url());
        employee_routes(Arc::new(EmployeeFacade::new(source, retry)))
    };

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("✅ Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
