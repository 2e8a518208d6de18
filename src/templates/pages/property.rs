use crate::core::BookingQuote;
use crate::models::{Listing, PropertyPageQuery};
use crate::templates::components::star_row;
use crate::templates::page_layout;
use maud::{html, Markup};

pub struct PropertyVm<'a> {
    pub listing: &'a Listing,
    pub query: &'a PropertyPageQuery,
    /// Present only when both dates were chosen
    pub quote: Option<BookingQuote>,
}

impl<'a> PropertyVm<'a> {
    pub fn new(listing: &'a Listing, query: &'a PropertyPageQuery) -> Self {
        let quote = match (query.check_in, query.check_out) {
            (Some(check_in), Some(check_out)) => Some(BookingQuote::new(check_in, check_out, listing.price)),
            _ => None,
        };

        Self { listing, query, quote }
    }

    fn guests(&self) -> u32 {
        self.query.guests.unwrap_or(1).max(1)
    }

    pub fn exceeds_capacity(&self) -> bool {
        self.guests() > self.listing.max_guests
    }

    /// Quote that a reservation may be requested against
    pub fn reservable_quote(&self) -> Option<BookingQuote> {
        self.quote
            .filter(BookingQuote::is_bookable)
            .filter(|_| !self.exceeds_capacity())
    }
}

pub fn property_page(vm: &PropertyVm) -> Markup {
    let listing = vm.listing;

    page_layout(
        &listing.title,
        html! {
            section class="gallery" {
                @if let Some(image) = listing.cover_image() {
                    img src=(image) alt=(listing.title);
                }
                @if listing.images.len() > 1 {
                    span class="badge" { (listing.images.len()) " photos" }
                }
            }

            div class="property-layout" {
                div class="property-main" {
                    header {
                        h1 { (listing.title) }
                        p class="muted" {
                            "★ " (listing.rating) " (" (listing.reviews.len()) " reviews) · " (listing.location)
                        }
                        p class="facts" {
                            span { (listing.max_guests) " guests" }
                            span { (listing.bedrooms) " bedrooms" }
                            span { (listing.bathrooms) " bathrooms" }
                        }
                    }

                    section class="card host" {
                        @if let Some(avatar) = &listing.host.avatar {
                            img class="avatar" src=(avatar) alt=(listing.host.name);
                        } @else {
                            span class="avatar" { (listing.host.initial()) }
                        }
                        h3 { "Hosted by " (listing.host.name) }
                    }

                    section class="card" {
                        h2 { "About this place" }
                        p { (listing.description) }
                        @if !listing.address.is_empty() {
                            p class="muted" { (listing.address) }
                        }
                    }

                    section class="card" {
                        h2 { "What this place offers" }
                        ul class="amenities" {
                            @for amenity in &listing.amenities {
                                li { (amenity) }
                            }
                        }
                    }

                    (reviews_section(listing))
                }

                (booking_sidebar(vm))
            }
        },
    )
}

fn reviews_section(listing: &Listing) -> Markup {
    html! {
        section class="card reviews" {
            h2 { "★ " (listing.rating) " · " (listing.reviews.len()) " reviews" }
            @if listing.reviews.is_empty() {
                p class="muted" { "No reviews yet" }
            } @else {
                @for review in &listing.reviews {
                    article class="review" {
                        p {
                            strong { (review.author.name) }
                            " · "
                            span class="muted" { (review.created_at.format("%B %-d, %Y").to_string()) }
                        }
                        (star_row(review.rating))
                        p { (review.comment) }
                    }
                }
            }
        }
    }
}

fn booking_sidebar(vm: &PropertyVm) -> Markup {
    let listing = vm.listing;
    let has_dates = vm.quote.is_some();

    html! {
        aside class="card booking" {
            h2 { "$" (listing.price) " " span class="muted" { "night" } }

            form method="get" action=(format!("/property/{}", urlencoding::encode(&listing.id))) {
                div class="field" {
                    label for="checkIn" { "Check-in" }
                    input id="checkIn" name="checkIn" type="date"
                        value=[vm.query.check_in.map(|d| d.to_string())];
                }
                div class="field" {
                    label for="checkOut" { "Check-out" }
                    input id="checkOut" name="checkOut" type="date"
                        value=[vm.query.check_out.map(|d| d.to_string())];
                }
                div class="field" {
                    label for="guests" { "Guests" }
                    input id="guests" name="guests" type="number" min="1" max=(listing.max_guests) value=(vm.guests());
                }

                @if let Some(quote) = &vm.quote {
                    div class="quote" {
                        p class="line" {
                            span { "$" (quote.nightly_price) " × " (quote.nights) " nights" }
                            span { "$" (quote.total) }
                        }
                        p class="line total" {
                            span { "Total" }
                            span { "$" (quote.total) }
                        }
                    }
                }

                @if has_dates {
                    button type="submit" name="reserve" value="1" class="primary" { "Reserve" }
                } @else {
                    button type="submit" class="primary" disabled { "Select dates" }
                }
            }

            @if vm.query.wants_reservation() {
                @if let Some(quote) = vm.reservable_quote() {
                    div class="notice" {
                        h3 { "Reservation requested" }
                        p { (quote.nights) " nights for " (vm.guests()) " guests, $" (quote.total) " total." }
                    }
                } @else if vm.exceeds_capacity() {
                    div class="notice warning" {
                        p { "This place allows at most " (listing.max_guests) " guests." }
                    }
                } @else {
                    div class="notice warning" {
                        p { "Choose a check-out date after your check-in date." }
                    }
                }
            }

            p class="muted" { "You won't be charged yet" }
        }
    }
}
