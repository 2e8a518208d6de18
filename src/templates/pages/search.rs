use crate::core::SearchResult;
use crate::models::FilterState;
use crate::templates::components::{active_filter_badges, empty_state, filter_sidebar};
use crate::templates::{page_layout, property_card, search_bar};
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub state: &'a FilterState,
    pub result: &'a SearchResult<'a>,
    pub price_step: u32,
}

pub fn search_page(vm: &SearchVm) -> Markup {
    page_layout(
        "Search",
        html! {
            section class="search-header" {
                (search_bar(vm.state))
            }

            div class="search-layout" {
                (filter_sidebar(vm.state, vm.price_step))

                section class="results" {
                    div class="results-header" {
                        h1 { (vm.result.summary()) " found" }
                        (active_filter_badges(vm.state))
                    }

                    @if vm.result.is_empty() {
                        (empty_state(vm.state))
                    } @else {
                        div class="grid" {
                            @for listing in &vm.result.listings {
                                (property_card(listing, vm.state))
                            }
                        }
                    }
                }
            }
        },
    )
}
