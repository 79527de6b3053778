// Listings page - full catalogue, optionally narrowed by the `search`
// query parameter the home hero navigates here with.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::PropertyCard;
use crate::constants::{PROPERTIES, Property};
use crate::search::{LISTINGS_PATH, SEARCH_PARAM, search_term};

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let query = use_query_map();
    let term = Signal::derive(move || {
        query.with(|q| {
            q.get(SEARCH_PARAM)
                .and_then(|raw| search_term(&raw).map(String::from))
        })
    });

    let matching = move || -> Vec<&'static Property> {
        match term.get() {
            Some(t) => {
                let needle = t.to_lowercase();
                PROPERTIES.iter().filter(|p| p.matches(&needle)).collect()
            }
            None => PROPERTIES.iter().collect(),
        }
    };

    view! {
        <Title text="Properties - Provision Land Limited" />
        <section class="py-16 bg-gray-50 min-h-screen">
            <div class="container mx-auto px-4">
                <h1 class="text-3xl font-serif font-bold text-slate-900 mb-2">"Our Properties"</h1>
                <Show
                    when=move || term.get().is_some()
                    fallback=|| {
                        view! {
                            <p class="text-gray-600 mb-10">
                                "Browse all available plots and parcels."
                            </p>
                        }
                    }
                >
                    <p class="text-gray-600 mb-10">
                        "Showing results for "
                        <span class="font-bold text-slate-900">
                            {move || term.get().unwrap_or_default()}
                        </span>
                        " — "
                        <a href=LISTINGS_PATH class="text-brand-600 hover:text-accent-600 underline">
                            "clear search"
                        </a>
                    </p>
                </Show>

                <Show
                    when=move || !matching().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-gray-500 py-12 text-center">
                                "No properties match your search. Try a location like Thika or Makutano."
                            </p>
                        }
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || {
                            matching()
                                .into_iter()
                                .map(|property| view! { <PropertyCard property=property /> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}
