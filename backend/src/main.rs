mod config;
mod error;
mod sentiment;
mod services;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::sentiment::VaderScorer;
use crate::state::AppState;
use crate::store::ReviewStore;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    // The service cannot run without its dataset.
    let store = ReviewStore::load(&config.data_file).map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;
    info!(
        "Loaded {} reviews from {}",
        store.len().await,
        store.path().display()
    );

    let state = AppState::new(store, Arc::new(VaderScorer::new()))
        .with_max_body_bytes(config.max_body_bytes);

    info!("Listening on {}:{}...", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .default_service(web::route().to(services::reviews::dispatch))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
