use leptos::prelude::*;

const CORE_VALUES: &[&str] = &[
    "Integrity - We are honest in all dealings",
    "Efficiency - We value your time",
    "Quality Service - Professionalism at its peak",
    "Transparency - No hidden costs or issues",
    "Trust - Your partner in growth",
];

#[component]
pub fn CoreValues() -> impl IntoView {
    view! {
        <section class="py-20 bg-brand-900 text-white relative overflow-hidden">
            <div class="container mx-auto px-4 relative z-10 flex flex-col md:flex-row items-center gap-12">
                <div class="flex-1">
                    <img
                        src="/core-values.jpg"
                        alt="Why choose us"
                        class="rounded-2xl shadow-2xl border-4 border-brand-700"
                    />
                </div>
                <div class="flex-1">
                    <h2 class="text-3xl md:text-4xl font-serif font-bold mb-6">"Our Core Values"</h2>
                    <p class="text-brand-100 mb-8">
                        "At Provision Land & Properties Ltd, we are driven by:"
                    </p>
                    <ul class="space-y-4">
                        {CORE_VALUES
                            .iter()
                            .map(|value| {
                                view! {
                                    <li class="flex items-center gap-3">
                                        <span class="text-accent-500">"✓"</span>
                                        <span class="text-lg">{*value}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
