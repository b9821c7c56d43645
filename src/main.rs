#![allow(warnings)]
//! Project Dashboard Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod fetch;
mod logging;
mod models;
mod search;
mod store;
mod tree;
mod view_state;

use app::App;
use config::Config;
use leptos::prelude::*;
use log::{error, info, LevelFilter};

fn main() {
    console_error_panic_hook::set_once();

    match Config::load() {
        Ok(config) => {
            logging::init(config.log_level);
            info!("[MAIN] API base URL: {}", config.api_base_url);
            mount_to_body(move || view! { <App config={config.clone()} /> });
        }
        Err(err) => {
            logging::init(LevelFilter::Info);
            error!("[MAIN] {}", err);
            let message = format!("Configuration error: {}", err);
            mount_to_body(move || view! { <div class="error-banner" role="alert">{message.clone()}</div> });
        }
    }
}
