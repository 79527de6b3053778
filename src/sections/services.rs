use leptos::prelude::*;

use crate::constants::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-serif font-bold text-slate-900 mb-4">"Our Services"</h2>
                    <div class="h-1 w-20 bg-accent-500 mx-auto rounded-full"></div>
                    <p class="mt-4 text-gray-600 max-w-2xl mx-auto">
                        "We promise and deliver genuinely across all our service offerings."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            let initial: String = service.title.chars().take(1).collect();
                            view! {
                                <div class="p-8 rounded-xl bg-gray-50 border border-gray-100 hover:shadow-xl transition group">
                                    <div class="w-14 h-14 bg-brand-100 rounded-lg flex items-center justify-center mb-6 group-hover:bg-brand-500 transition">
                                        <span class="text-brand-600 group-hover:text-white font-bold text-xl">
                                            {initial}
                                        </span>
                                    </div>
                                    <h3 class="text-xl font-bold text-slate-900 mb-3">{service.title}</h3>
                                    <p class="text-gray-600 text-sm">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
