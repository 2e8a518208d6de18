use crate::models::{FilterState, Listing};
use crate::templates::{page_layout, property_card, search_bar};
use maud::{html, Markup};

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Verified Properties",
        "Every stay is checked against our quality standards before it is listed.",
    ),
    (
        "Secure Booking",
        "Reserve with confidence; nothing is charged until your host confirms.",
    ),
    (
        "24/7 Support",
        "Our support team is around the clock for guests and hosts alike.",
    ),
];

pub fn home_page(featured: &[Listing]) -> Markup {
    let state = FilterState::default();

    page_layout(
        "Find Your Perfect Home Away From Home",
        html! {
            section class="hero" {
                h1 { "Find Your Perfect " span class="accent" { "Home Away From Home" } }
                p class="lead" {
                    "Discover unique accommodations around the world and create unforgettable experiences with StayVibe."
                }
                (search_bar(&state))
                a href="/search" class="button primary" { "Explore All Properties →" }
            }

            section class="featured" {
                h2 { "Featured Properties" }
                p class="muted" { "Handpicked properties from our collection" }
                div class="grid" {
                    @for listing in featured {
                        (property_card(listing, &state))
                    }
                }
                a href="/search" class="button outline" { "View All Properties →" }
            }

            section class="highlights" {
                h2 { "Why Choose StayVibe?" }
                div class="grid" {
                    @for (title, body) in HIGHLIGHTS {
                        div class="card" {
                            h3 { (title) }
                            p { (body) }
                        }
                    }
                }
            }

            section class="host-cta" {
                h2 { "Share Your Space, Earn Extra Income" }
                p { "Join thousands of hosts who welcome travelers from around the world." }
                a href="/about" class="button" { "Learn more" }
            }
        },
    )
}
