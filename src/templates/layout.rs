use maud::{html, Markup, DOCTYPE};

const SITE_NAME: &str = "StayVibe";

pub fn page_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Discover unique accommodations and create unforgettable experiences with StayVibe.";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/search" { "Find a stay" } }
                            li { a href="/about" { "About" } }
                        }
                    }
                }
                main { (content) }
                footer class="site-footer" {
                    p { "© " (SITE_NAME) ". Find your perfect home away from home." }
                }
            }
        }
    }
}
