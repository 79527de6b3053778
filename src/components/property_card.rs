use leptos::prelude::*;

use crate::constants::Property;

/// Card used by the featured grid and the listings page.
#[component]
pub fn PropertyCard(property: &'static Property) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl overflow-hidden shadow hover:shadow-xl transition group">
            <div class="relative h-52 overflow-hidden">
                <img
                    src=property.image
                    alt=property.title
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform"
                />
                <span class="absolute top-3 left-3 bg-accent-600 text-white text-xs font-bold uppercase px-3 py-1 rounded-full">
                    {property.category}
                </span>
            </div>
            <div class="p-6">
                <h3 class="text-lg font-bold text-slate-900 mb-1">{property.title}</h3>
                <p class="text-sm text-gray-500 mb-4">
                    {format!("{} · {}", property.location, property.size)}
                </p>
                <p class="text-xl font-bold text-brand-600">{property.price_display()}</p>
            </div>
        </div>
    }
}
