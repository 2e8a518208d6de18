use maud::{html, Markup};

use crate::core::filters::{AMENITY_CHOICES, BEDROOM_CHOICES};
use crate::models::{FilterState, Listing};

/// Number of amenity badges shown on a card before "+N more"
const CARD_AMENITY_LIMIT: usize = 3;

/// Link to a property page, carrying the chosen stay dates along
pub fn property_href(listing: &Listing, state: &FilterState) -> String {
    let mut params = Vec::new();
    if let Some(check_in) = state.check_in {
        params.push(format!("checkIn={}", check_in));
    }
    if let Some(check_out) = state.check_out {
        params.push(format!("checkOut={}", check_out));
    }
    if let Some(guests) = state.guests {
        params.push(format!("guests={}", guests));
    }

    let base = format!("/property/{}", urlencoding::encode(&listing.id));
    if params.is_empty() {
        base
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}

pub fn property_card(listing: &Listing, state: &FilterState) -> Markup {
    let extra_amenities = listing.amenities.len().saturating_sub(CARD_AMENITY_LIMIT);

    html! {
        article class="card property-card" {
            a href=(property_href(listing, state)) {
                div class="card-image" {
                    @if let Some(image) = listing.cover_image() {
                        img src=(image) alt=(listing.title) loading="lazy";
                    }
                    span class="badge price-badge" { "$" (listing.price) "/night" }
                }
                div class="card-body" {
                    div class="card-title-row" {
                        h3 { (listing.title) }
                        span class="rating" { "★ " (listing.rating) }
                    }
                    p class="location" { (listing.location) }
                    p class="facts" {
                        span { (listing.max_guests) " guests" }
                        span { (listing.bedrooms) " bd" }
                        span { (listing.bathrooms) " ba" }
                    }
                    div class="badges" {
                        @for amenity in listing.amenities.iter().take(CARD_AMENITY_LIMIT) {
                            span class="badge" { (amenity) }
                        }
                        @if extra_amenities > 0 {
                            span class="badge outline" { "+" (extra_amenities) " more" }
                        }
                    }
                }
            }
        }
    }
}

/// Where / check in / check out / guests form
///
/// Sidebar filters ride along as hidden fields so a new search only
/// replaces the search-bar fields.
pub fn search_bar(state: &FilterState) -> Markup {
    let (min_price, max_price) = (state.min_price, state.max_price);

    html! {
        form class="card search-bar" method="get" action="/search" {
            div class="field" {
                label for="location" { "Where" }
                input id="location" name="location" type="text"
                    placeholder="Search destinations"
                    value=[state.location.as_deref()];
            }
            div class="field" {
                label for="checkIn" { "Check in" }
                input id="checkIn" name="checkIn" type="date"
                    value=[state.check_in.map(|d| d.to_string())];
            }
            div class="field" {
                label for="checkOut" { "Check out" }
                input id="checkOut" name="checkOut" type="date"
                    value=[state.check_out.map(|d| d.to_string())];
            }
            div class="field" {
                label for="guests" { "Guests" }
                input id="guests" name="guests" type="number" min="1"
                    placeholder="Add guests"
                    value=[state.guests];
            }
            @if let Some(min) = min_price {
                input type="hidden" name="minPrice" value=(min);
            }
            @if let Some(max) = max_price {
                input type="hidden" name="maxPrice" value=(max);
            }
            @if let Some(bedrooms) = state.bedrooms {
                input type="hidden" name="bedrooms" value=(bedrooms);
            }
            @for amenity in &state.amenities {
                input type="hidden" name="amenities" value=(amenity);
            }
            button type="submit" class="primary" { "Search" }
        }
    }
}

pub fn filter_sidebar(state: &FilterState, price_step: u32) -> Markup {
    let (min_price, max_price) = state.price_range();
    let ceiling = state.price_ceiling();

    html! {
        aside class="card filters" {
            div class="filters-header" {
                h2 { "Filters" }
                a href=(state.cleared().search_href()) class="ghost" { "Clear all" }
            }
            form method="get" action="/search" {
                @if let Some(location) = &state.location {
                    input type="hidden" name="location" value=(location);
                }
                @if let Some(check_in) = state.check_in {
                    input type="hidden" name="checkIn" value=(check_in.to_string());
                }
                @if let Some(check_out) = state.check_out {
                    input type="hidden" name="checkOut" value=(check_out.to_string());
                }
                @if let Some(guests) = state.guests {
                    input type="hidden" name="guests" value=(guests);
                }
                @if let Some(bedrooms) = state.bedrooms {
                    input type="hidden" name="bedrooms" value=(bedrooms);
                }

                fieldset {
                    legend { "Price Range" }
                    div class="price-range" {
                        input type="number" name="minPrice" min="0" max=(ceiling) step=(price_step) value=(min_price);
                        span { "to" }
                        input type="number" name="maxPrice" min="0" max=(ceiling) step=(price_step) value=(max_price);
                    }
                    p class="muted" { "$" (min_price) " – $" (max_price) }
                }

                fieldset {
                    legend { "Amenities" }
                    @for amenity in AMENITY_CHOICES {
                        label class="checkbox" {
                            input type="checkbox" name="amenities" value=(amenity) checked[state.has_amenity(amenity)];
                            " " (amenity)
                        }
                    }
                }

                button type="submit" class="primary" { "Apply filters" }
            }

            fieldset {
                legend { "Bedrooms" }
                div class="bedroom-choices" {
                    @for count in BEDROOM_CHOICES {
                        a href=(state.toggle_bedrooms(count).search_href())
                            class=(if state.bedrooms == Some(count) { "chip selected" } else { "chip" }) {
                            (count) "+"
                        }
                    }
                }
            }
        }
    }
}

/// Removable badges for the location / guests / bedrooms filters
pub fn active_filter_badges(state: &FilterState) -> Markup {
    html! {
        div class="badges active-filters" {
            @if let Some(location) = &state.location {
                span class="badge" {
                    (location) " "
                    a href=(state.without_location().search_href()) aria-label="Remove location filter" { "×" }
                }
            }
            @if let Some(guests) = state.guests {
                span class="badge" {
                    (guests) " guests "
                    a href=(state.without_guests().search_href()) aria-label="Remove guests filter" { "×" }
                }
            }
            @if let Some(bedrooms) = state.bedrooms {
                span class="badge" {
                    (bedrooms) "+ bedrooms "
                    a href=(state.without_bedrooms().search_href()) aria-label="Remove bedrooms filter" { "×" }
                }
            }
        }
    }
}

pub fn empty_state(state: &FilterState) -> Markup {
    html! {
        div class="card empty-state" {
            h3 { "No properties found" }
            p { "Try adjusting your filters or search criteria" }
            a href=(state.cleared().search_href()) class="button primary" { "Clear all filters" }
        }
    }
}

pub fn star_row(rating: u8) -> Markup {
    html! {
        span class="stars" aria-label=(format!("{} out of 5 stars", rating)) {
            @for i in 0..5u8 {
                @if i < rating { "★" } @else { "☆" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ListingStore;

    #[test]
    fn test_property_href_carries_dates() {
        let store = ListingStore::embedded().unwrap();
        let listing = store.get("1").unwrap();
        let state = crate::models::FilterState::from_params(
            crate::models::SearchParams::from_query("checkIn=2024-03-01&checkOut=2024-03-04"),
            500,
        );

        assert_eq!(
            property_href(listing, &state),
            "/property/1?checkIn=2024-03-01&checkOut=2024-03-04"
        );
        assert_eq!(property_href(listing, &FilterState::default()), "/property/1");
    }

    #[test]
    fn test_card_shows_more_badge() {
        let store = ListingStore::embedded().unwrap();
        let listing = store.get("1").unwrap();
        let markup = property_card(listing, &FilterState::default()).into_string();

        assert!(markup.contains("$350/night"));
        assert!(markup.contains("+3 more"));
    }

    #[test]
    fn test_sidebar_marks_selected_bedrooms() {
        let state = FilterState::default().toggle_bedrooms(2);
        let markup = filter_sidebar(&state, 10).into_string();

        assert!(markup.contains("chip selected"));
        assert!(markup.contains("href=\"/search\""));
    }
}
