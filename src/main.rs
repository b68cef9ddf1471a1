//! Runs one member page search against the configured database and prints it as JSON.
//!
//! Usage: `member-search [QUERY_STRING]`, e.g.
//! `member-search "team_name=teamB&age_goe=20&page=0&size=10"`.

use std::env;
use std::process::ExitCode;

use config::Config;
use dotenvy::dotenv;

use member_search::db::{ConnectionOptions, QueryLog, establish_connection_pool_with};
use member_search::models::config::AppConfig;
use member_search::repository::DieselRepository;
use member_search::services::member::{parse_search_form, search_members_page};

fn load_config() -> Result<AppConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<AppConfig>()
}

fn main() -> ExitCode {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_config = match load_config() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            return ExitCode::FAILURE;
        }
    };

    let query_log = QueryLog::new();
    let options = ConnectionOptions {
        query_log: Some(query_log.clone()),
        ..ConnectionOptions::from(&app_config)
    };

    let pool = match establish_connection_pool_with(&app_config.database_url, options) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            return ExitCode::FAILURE;
        }
    };
    let repo = DieselRepository::new(pool);

    let query = env::args().nth(1).unwrap_or_default();
    let baseline = query_log.executed();

    let response = parse_search_form(&query)
        .and_then(|form| search_members_page(&repo, form, app_config.default_page_size));

    let response = match response {
        Ok(response) => response,
        Err(err) => {
            log::error!("Member search failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Loaded {} of {} members with {} statements",
        response.members.len(),
        response.total,
        query_log.executed() - baseline
    );

    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to serialize response: {err}");
            ExitCode::FAILURE
        }
    }
}
