use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::core::{evaluate, BookingQuote};
use crate::errors::AppError;
use crate::models::{FilterState, HealthResponse, QuoteRequest, QuoteResponse, SearchParams, SearchResponse};
use crate::routes::AppState;

/// Configure all JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/listings", web::get().to(search_listings))
        .route("/listings/{id}", web::get().to(get_listing))
        .route("/listings/{id}/quote", web::get().to(quote_listing));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        listings: state.listings.len(),
    })
}

/// Search listings
///
/// GET /api/v1/listings?location=aspen&guests=2&minPrice=100&amenities=WiFi&amenities=Pool
///
/// Accepts the same parameters as the search page. Unparseable values are
/// ignored rather than rejected.
async fn search_listings(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let params = SearchParams::from_query(req.query_string());
    let filters = FilterState::from_params(params, state.search.price_ceiling);

    let result = evaluate(state.listings.all(), &filters);

    tracing::info!(
        "Search matched {} of {} listings",
        result.len(),
        result.total_listings
    );

    HttpResponse::Ok().json(SearchResponse::new(result, &filters))
}

/// Fetch one listing by id
///
/// GET /api/v1/listings/{id}
async fn get_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let listing = state
        .listings
        .get(&id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;

    Ok(HttpResponse::Ok().json(listing))
}

/// Price a stay without reserving anything
///
/// GET /api/v1/listings/{id}/quote?checkIn=2024-03-01&checkOut=2024-03-04&guests=2
async fn quote_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<QuoteRequest>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let id = path.into_inner();
    let listing = state
        .listings
        .get(&id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;

    if query.guests > listing.max_guests {
        return Err(AppError::BadRequest(format!(
            "{} guests exceeds the capacity of {} for listing {}",
            query.guests, listing.max_guests, listing.id
        )));
    }

    let quote = BookingQuote::new(query.check_in, query.check_out, listing.price);

    tracing::debug!(
        "Quoted listing {}: {} nights, total {}",
        listing.id,
        quote.nights,
        quote.total
    );

    Ok(HttpResponse::Ok().json(QuoteResponse {
        listing_id: listing.id.clone(),
        check_in: quote.check_in,
        check_out: quote.check_out,
        nights: quote.nights,
        nightly_price: quote.nightly_price,
        total: quote.total,
        guests: query.guests,
    }))
}
