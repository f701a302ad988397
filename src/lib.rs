pub mod domain;
pub mod dto;
pub mod fetcher;
pub mod forms;
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::fetcher::PlaceholderFetcher;
    use crate::models::config::ServerConfig;
    use crate::routes::main::{show_index, submit_search};
    use crate::routes::search::show_search;

    /// Registers the page routes.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(show_index)
            .service(submit_search)
            .service(show_search);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let fetcher = PlaceholderFetcher::new();

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(fetcher.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
