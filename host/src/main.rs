mod config;
mod services;

use crate::config::HostConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            open_in_browser(&url_clone, webbrowser::open);
        });
    }

    let client_config = web::Data::new(config.client_config());

    info!("Server running at {}", url);
    info!("Marketplace backend at {}", client_config.backend_origin);

    HttpServer::new(move || {
        App::new()
            .app_data(client_config.clone())
            .service(services::client_config::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

/// Tries to show the UI. A headless start only leaves a warning.
fn open_in_browser(url: &str, open: impl FnOnce(&str) -> io::Result<()>) -> bool {
    match open(url) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not open a browser at {}: {}", url, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_failure_does_not_stop_startup() {
        let opened = open_in_browser("http://127.0.0.1:8080", |_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        });
        assert!(!opened);
    }

    #[test]
    fn browser_gets_the_host_url() {
        let mut seen = String::new();
        assert!(open_in_browser("http://127.0.0.1:8080", |url| {
            seen = url.to_string();
            Ok(())
        }));
        assert_eq!(seen, "http://127.0.0.1:8080");
    }
}
