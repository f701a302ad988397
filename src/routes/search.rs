use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::domain::header::HeaderState;
use crate::domain::results::SearchParams;
use crate::fetcher::PlaceholderFetcher;
use crate::routes::{base_context, render_template, render_template_with_status};
use crate::services::{ServiceError, results as results_service};

#[get("/search")]
/// Show results for the outbound URL passed in `url`.
pub async fn show_search(
    req: HttpRequest,
    fetcher: web::Data<PlaceholderFetcher>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = SearchParams::from_query(req.query_string());

    match results_service::load_search_page(params, fetcher.get_ref()) {
        Ok(data) => {
            let mut context = base_context(HeaderState::default(), "search");
            context.insert("params", &data.params);
            context.insert("results", &data.results);

            render_template(&tera, "search/index.html", &context)
        }
        Err(ServiceError::NotFound) => {
            let context = base_context(HeaderState::default(), "not_found");
            render_template_with_status(
                &tera,
                "errors/not_found.html",
                &context,
                StatusCode::NOT_FOUND,
            )
        }
        Err(err) => {
            log::error!("Failed to load search results: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
