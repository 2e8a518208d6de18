use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse, Responder};
use maud::Markup;

use crate::core::evaluate;
use crate::models::{FilterState, PropertyPageQuery, SearchParams};
use crate::routes::AppState;
use crate::templates::pages::{self, PropertyVm, SearchVm};

const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Configure the server-rendered pages
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/about", web::get().to(about))
        .route("/search", web::get().to(search))
        .route("/property/{id}", web::get().to(property))
        .route("/static/main.css", web::get().to(stylesheet))
        .default_service(web::route().to(not_found));
}

fn html(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string())
}

fn html_not_found(markup: Markup) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(markup.into_string())
}

async fn home(state: web::Data<AppState>) -> impl Responder {
    let featured = state.listings.featured(state.search.featured_count);
    html(pages::home_page(featured))
}

async fn about() -> impl Responder {
    html(pages::about_page())
}

/// Search page
///
/// The filter state is rebuilt from the query string on every request and
/// the store is re-evaluated in full; every control on the page links to
/// the next state's query string.
async fn search(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let params = SearchParams::from_query(req.query_string());
    let filters = FilterState::from_params(params, state.search.price_ceiling);
    let result = evaluate(state.listings.all(), &filters);

    tracing::debug!(
        "Search page: {} of {} listings for {:?}",
        result.len(),
        result.total_listings,
        filters.to_query_string()
    );

    html(pages::search_page(&SearchVm {
        state: &filters,
        result: &result,
        price_step: state.search.price_step,
    }))
}

async fn property(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> impl Responder {
    let id = path.into_inner();

    match state.listings.get(&id) {
        Some(listing) => {
            let query = PropertyPageQuery::from_query(req.query_string());
            let vm = PropertyVm::new(listing, &query);
            if query.wants_reservation() {
                match vm.reservable_quote() {
                    Some(quote) => tracing::info!(
                        "Reservation requested for listing {} ({} nights), nothing committed",
                        listing.id,
                        quote.nights
                    ),
                    None => tracing::debug!(
                        "Reservation refused for listing {}: dates {:?} / {:?}, guests {:?}",
                        listing.id,
                        query.check_in,
                        query.check_out,
                        query.guests
                    ),
                }
            }
            html(pages::property_page(&vm))
        }
        None => {
            tracing::debug!("Unknown property id {}", id);
            html_not_found(pages::not_found_page(
                "Property not found",
                "The property you're looking for doesn't exist.",
            ))
        }
    }
}

async fn stylesheet() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(MAIN_CSS)
}

async fn not_found(req: HttpRequest) -> impl Responder {
    tracing::debug!("No route for {} {}", req.method(), req.path());
    html_not_found(pages::not_found_page(
        "Page not found",
        "We couldn't find the page you were looking for.",
    ))
}
