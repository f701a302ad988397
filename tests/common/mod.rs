use takeflight::domain::search::DateStyle;
use takeflight::models::config::ServerConfig;
use tera::Tera;

pub const ENDPOINT: &str = "https://www.booking.com/searchresults.html";

pub fn tera() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("templates should parse")
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        assets_dir: "./assets".to_string(),
        search_endpoint: ENDPOINT.to_string(),
        date_style: DateStyle::Unpadded,
    }
}

/// Builds the application service with the page routes and test data.
macro_rules! test_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(common::tera()))
                .app_data(actix_web::web::Data::new(common::server_config()))
                .app_data(actix_web::web::Data::new(
                    takeflight::fetcher::PlaceholderFetcher::new(),
                ))
                .configure(takeflight::configure),
        )
        .await
    };
}
