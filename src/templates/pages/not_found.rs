use crate::templates::page_layout;
use maud::{html, Markup};

pub fn not_found_page(title: &str, message: &str) -> Markup {
    page_layout(
        title,
        html! {
            section class="not-found" {
                h1 { (title) }
                p class="muted" { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    )
}
