use leptos::prelude::*;

use crate::constants::COMPANY_INFO;

#[component]
pub fn SiteVisitCta() -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy_phone = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(COMPANY_INFO.phone_primary);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <section class="py-16 bg-brand-600 text-white text-center">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-serif font-bold mb-4">"Site Visits Available Daily!"</h2>
                <p class="text-brand-100 mb-8 max-w-2xl mx-auto">
                    {format!(
                        "Call {} or {} to book your site visit to Matuu, Thika, or Ithanga.",
                        COMPANY_INFO.phone_primary, COMPANY_INFO.phone_secondary,
                    )}
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <button
                        class="bg-white text-brand-600 px-8 py-3 rounded-full font-bold hover:bg-gray-100 shadow-lg"
                        on:click=copy_phone
                    >
                        {move || {
                            if copied.get() { "Number copied!" } else { "Copy Phone Number" }
                        }}
                    </button>
                </div>
            </div>
        </section>
    }
}
