use leptos::prelude::*;

use crate::components::PropertyCard;
use crate::constants::PROPERTIES;
use crate::search::LISTINGS_PATH;

/// How many fresh listings the landing page shows.
const FEATURED_COUNT: usize = 3;

#[component]
pub fn FeaturedProperties() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-end mb-12">
                    <div>
                        <h2 class="text-3xl font-serif font-bold text-slate-900 mb-2">"New Arrivals"</h2>
                        <p class="text-gray-600">"Fresh listings from Thika, Murang'a, and Machakos."</p>
                    </div>
                    <a
                        href=LISTINGS_PATH
                        class="hidden md:flex items-center gap-2 text-brand-600 font-bold hover:text-accent-600"
                    >
                        "View All Properties →"
                    </a>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROPERTIES
                        .iter()
                        .take(FEATURED_COUNT)
                        .map(|property| view! { <PropertyCard property=property /> })
                        .collect_view()}
                </div>
                <div class="mt-12 text-center md:hidden">
                    <a
                        href=LISTINGS_PATH
                        class="inline-block bg-white border border-gray-300 text-slate-700 font-bold py-3 px-8 rounded-full hover:bg-gray-100"
                    >
                        "View All Properties"
                    </a>
                </div>
            </div>
        </section>
    }
}
