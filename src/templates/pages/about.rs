use crate::templates::page_layout;
use maud::{html, Markup};

const FEATURES: [(&str, &str); 4] = [
    ("Secure & Safe", "Properties are verified and payments are protected."),
    ("Carefully Curated", "Each property is hand-picked for quality and character."),
    ("Award Winning", "Recognized by the industry as a leading place to book a stay."),
    ("Growing Community", "Millions of travelers and hosts sharing memorable trips."),
];

const VALUES: [(&str, &str); 4] = [
    ("Authenticity", "Genuine experiences that connect travelers with local culture."),
    ("Community", "A global network of travelers and hosts who love to share."),
    ("Trust", "A safe and secure environment for everyone who uses StayVibe."),
    ("Innovation", "A platform that keeps getting better for guests and hosts."),
];

pub fn about_page() -> Markup {
    page_layout(
        "About",
        html! {
            section class="hero" {
                h1 { "About StayVibe" }
                p class="lead" {
                    "We want a world where anyone can belong anywhere, connecting people through unique places to stay."
                }
                a href="/search" class="button primary" { "Start Your Journey" }
            }

            section class="story" {
                h2 { "Our Story" }
                p {
                    "StayVibe started in 2020 with a simple idea: everyone should be able to find an authentic, "
                    "memorable place to stay. A small team set out to connect travelers with remarkable homes."
                }
                p {
                    "Since then it has grown into a community of hosts and guests, from city apartments to "
                    "villas by the ocean, and the mission has not changed."
                }
            }

            section class="highlights" {
                h2 { "Why Choose StayVibe?" }
                div class="grid" {
                    @for (title, body) in FEATURES {
                        div class="card" { h3 { (title) } p { (body) } }
                    }
                }
            }

            section class="values" {
                h2 { "Our Values" }
                div class="grid" {
                    @for (title, body) in VALUES {
                        div class="card" { h3 { (title) } p { (body) } }
                    }
                }
            }

            section class="host-cta" {
                h2 { "Ready to Start Your Journey?" }
                a href="/search" class="button primary" { "Find Places to Stay" }
            }
        },
    )
}
