//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::{StatusCode, header};
use tera::{Context, Tera};

use crate::domain::header::{
    BRAND_LOGO, BRAND_NAME, CALLS_TO_ACTION, HeaderEvent, HeaderState, LOGIN_HREF, NAV_LINKS,
    PRODUCTS,
};
use crate::domain::navigation::Navigation;

pub mod main;
pub mod search;

/// Renders `template` with a `200 OK` status.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Carries out a navigation returned by a service.
pub fn dispatch(navigation: Navigation) -> HttpResponse {
    redirect(&navigation.location)
}

/// Parses the header toggles from a page query, falling back to closed.
pub fn header_state(query: &str) -> HeaderState {
    serde_html_form::from_str(query).unwrap_or_else(|err| {
        log::warn!("Ignoring malformed header state {query:?}: {err}");
        HeaderState::default()
    })
}

fn header_href(state: HeaderState, event: HeaderEvent) -> String {
    format!("/?{}", state.apply(event).to_query())
}

/// Context shared by every page: header content and toggle links.
pub fn base_context(state: HeaderState, current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("brand_name", BRAND_NAME);
    context.insert("brand_logo", BRAND_LOGO);
    context.insert("products", PRODUCTS);
    context.insert("calls_to_action", CALLS_TO_ACTION);
    context.insert("nav_links", NAV_LINKS);
    context.insert("login_href", LOGIN_HREF);
    context.insert("menu_open", &state.mobile_menu.is_open());
    context.insert("stays_open", &state.stays_panel.is_open());
    context.insert(
        "open_menu_href",
        &header_href(state, HeaderEvent::OpenMobileMenu),
    );
    context.insert(
        "close_menu_href",
        &header_href(state, HeaderEvent::CloseMobileMenu),
    );
    context.insert(
        "toggle_stays_href",
        &header_href(state, HeaderEvent::ToggleStays),
    );
    context
}
