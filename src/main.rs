use std::process::ExitCode;
use std::time::Instant;

use tracing::{error, info};

use xui2remnawave::config::{MigrationConfig, SourceMode};
use xui2remnawave::destination::RemnawaveClient;
use xui2remnawave::logging;
use xui2remnawave::migration::{migrate_users, MigrationReport};
use xui2remnawave::source::{fetch_from_file, XuiClient};

#[tokio::main]
async fn main() -> ExitCode {
    let config = MigrationConfig::from_env();

    let log_path = match logging::init(&config.log_dir) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("failed to set up logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(report) => {
            info!("------------------------------------------------");
            info!(
                "migration finished: created {}, updated {}, errors {}",
                report.counters.created, report.counters.updated, report.counters.errors
            );
            info!(
                "elapsed {:.2}s, {:.2} users/sec",
                report.elapsed.as_secs_f64(),
                report.records_per_second()
            );
            info!("detailed log: {}", log_path.display());

            if report.counters.errors == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("migration aborted: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Fetches the source list, runs the batch, and assembles the report.
/// Failures here are fatal setup failures: nothing has been migrated yet
/// (or the HTTP client could not even be built).
async fn run(config: &MigrationConfig) -> anyhow::Result<MigrationReport> {
    let started = Instant::now();
    let http_client = config.http_client()?;

    let users = match config.source {
        SourceMode::File => fetch_from_file(&config.config_path).await?,
        SourceMode::Login => {
            let xui = XuiClient::new(http_client.clone(), config.xui_url.clone());
            let session = xui.login(&config.xui_username, &config.xui_password).await?;
            xui.fetch_inbounds(&session).await?
        }
    };

    let destination = RemnawaveClient::new(
        http_client,
        config.remn_api_url.clone(),
        config.remn_token.clone(),
    );
    let counters = migrate_users(&destination, &users).await;

    Ok(MigrationReport::new(counters, users.len(), started.elapsed()))
}
