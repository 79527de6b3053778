use leptos::prelude::*;

use crate::constants::COMPANY_INFO;
use crate::search::LISTINGS_PATH;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-100 sticky top-0 z-40">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <img src="/logo.png" alt=COMPANY_INFO.name class="h-9" />
                    <span class="font-serif font-bold text-slate-900">{COMPANY_INFO.name}</span>
                </a>
                <div class="flex items-center gap-6 text-sm font-semibold text-slate-700">
                    <a href="/" class="hover:text-accent-600">"Home"</a>
                    <a href=LISTINGS_PATH class="hover:text-accent-600">"Properties"</a>
                    <a
                        href=format!("tel:{}", COMPANY_INFO.phone_primary.replace(' ', ""))
                        class="bg-accent-600 text-white px-5 py-2 rounded-full hover:bg-accent-700"
                    >
                        {COMPANY_INFO.phone_primary}
                    </a>
                </div>
            </div>
        </nav>
    }
}
