use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use chrono::Local;
use tera::Tera;

use crate::domain::header::HeaderState;
use crate::dto::main::IndexPageData;
use crate::forms::search::{FORM_DATE_FORMAT, SearchForm};
use crate::models::config::ServerConfig;
use crate::routes::{base_context, dispatch, header_state, render_template};
use crate::services::{ServiceError, search as search_service};

fn render_index(tera: &Tera, header: HeaderState, data: &IndexPageData) -> HttpResponse {
    let mut context = base_context(header, "index");
    context.insert("form", &data.form);
    context.insert("errors", &data.errors);
    context.insert("min_date", &data.min_date);

    render_template(tera, "main/index.html", &context)
}

#[get("/")]
/// Show the search form with its default values.
pub async fn show_index(req: HttpRequest, tera: web::Data<Tera>) -> impl Responder {
    let today = Local::now().date_naive();
    let data = IndexPageData {
        form: SearchForm::with_defaults(today),
        errors: BTreeMap::new(),
        min_date: today.format(FORM_DATE_FORMAT).to_string(),
    };

    render_index(&tera, header_state(req.query_string()), &data)
}

#[post("/")]
/// Validate the search form and send the browser to the results page.
pub async fn submit_search(
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SearchForm>,
) -> impl Responder {
    match search_service::submit_search(
        &form,
        &server_config.search_endpoint,
        server_config.date_style,
    ) {
        Ok(navigation) => dispatch(navigation),
        Err(ServiceError::Form(errors)) => {
            let data = IndexPageData {
                form,
                errors: errors.messages(),
                min_date: Local::now().date_naive().format(FORM_DATE_FORMAT).to_string(),
            };
            render_index(&tera, HeaderState::default(), &data)
        }
        Err(err) => {
            log::error!("Failed to submit search: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
