//! Homework review status notifier.
//!
//! Polls the review API on a fixed interval and forwards status changes to a
//! Telegram chat. Runs until terminated from outside.

mod config;
mod logging;

use chrono::Utc;
use log::LevelFilter;
use notifier_engine::{ApiSettings, PollSettings, Poller, PracticumClient, TelegramSender};

use crate::config::AppConfig;
use crate::logging::LogDestination;

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            // The bot credential itself may be the missing piece, so there is
            // no notification attempt here.
            logging::initialize(LogDestination::Terminal, LevelFilter::Info);
            log::error!("startup aborted: {err}");
            std::process::exit(1);
        }
    };
    logging::initialize(LogDestination::Terminal, config.log_level);

    let api_settings = ApiSettings::new(config.endpoint.as_str(), config.practicum_token.as_str());
    let api = match PracticumClient::new(api_settings) {
        Ok(api) => api,
        Err(err) => {
            log::error!("startup aborted: {err}");
            std::process::exit(1);
        }
    };
    let sender = match TelegramSender::new(&config.telegram_token) {
        Ok(sender) => sender,
        Err(err) => {
            log::error!("startup aborted: {err}");
            std::process::exit(1);
        }
    };

    let settings = PollSettings {
        chat_id: config.chat_id.clone(),
        interval: config.poll_interval,
        empty_policy: config.empty_policy,
    };
    let start_cursor = Utc::now().timestamp();
    log::info!(
        "polling {} every {}s, starting at {start_cursor}",
        config.endpoint,
        config.poll_interval.as_secs()
    );

    Poller::new(api, sender, settings, start_cursor).run().await;
}
