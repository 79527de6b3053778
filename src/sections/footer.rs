use leptos::prelude::*;

use crate::constants::COMPANY_INFO;
use crate::search::LISTINGS_PATH;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-brand-900 text-brand-100 py-12">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="flex items-center gap-2">
                    <img src="/logo.png" alt=COMPANY_INFO.name class="h-8" />
                    <span class="font-serif font-bold text-white">{COMPANY_INFO.name}</span>
                </div>
                <div class="flex gap-6 text-sm">
                    <a href="/" class="hover:text-white">"Home"</a>
                    <a href=LISTINGS_PATH class="hover:text-white">"Properties"</a>
                </div>
                <p class="text-sm text-brand-200">
                    {format!("{} | {}", COMPANY_INFO.phone_primary, COMPANY_INFO.phone_secondary)}
                </p>
            </div>
        </footer>
    }
}
