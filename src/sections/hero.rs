//! Hero carousel with the plot search box.
//!
//! The carousel auto-advances every six seconds while mounted; the interval
//! handle is cleared in `on_cleanup` so no ticks outlive the section.

use std::time::Duration;

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use leptos_router::hooks::use_navigate;

use crate::carousel::Rotator;
use crate::constants::{COMPANY_INFO, HERO_SLIDES};
use crate::search::listings_href;

const AUTO_ADVANCE: Duration = Duration::from_millis(6000);

/// Starts the repeating auto-advance tick. The caller owns the handle;
/// clearing it stops the ticks for good.
pub fn start_auto_advance(set_rotator: WriteSignal<Rotator>) -> Option<IntervalHandle> {
    set_interval_with_handle(move || set_rotator.update(Rotator::advance), AUTO_ADVANCE).ok()
}

#[component]
pub fn Hero() -> impl IntoView {
    let (rotator, set_rotator) = signal(Rotator::new(HERO_SLIDES.len()));
    let (search_text, set_search_text) = signal(String::new());

    // One repeating timer per mount, released with the section.
    if let Some(handle) = start_auto_advance(set_rotator) {
        on_cleanup(move || handle.clear());
    }

    let navigate = use_navigate();
    let submit = move || {
        navigate(&listings_href(&search_text.get_untracked()), Default::default());
    };
    let submit_on_click = {
        let submit = submit.clone();
        move |_| submit()
    };
    let submit_on_enter = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    let current_slide = move || &HERO_SLIDES[rotator.get().current()];

    view! {
        <section class="relative h-[650px] md:h-[800px] flex items-center overflow-hidden bg-brand-900 group">
            {HERO_SLIDES
                .iter()
                .enumerate()
                .map(|(index, slide)| {
                    let front = move || rotator.get().current() == index;
                    view! {
                        <div class=move || {
                            if front() {
                                "absolute inset-0 w-full h-full transition-opacity duration-1000 opacity-100 z-10"
                            } else {
                                "absolute inset-0 w-full h-full transition-opacity duration-1000 opacity-0 z-0"
                            }
                        }>
                            <img
                                src=slide.image
                                alt=slide.title
                                class=move || {
                                    if front() {
                                        "w-full h-full object-cover transition-transform duration-[10000ms] ease-linear scale-110"
                                    } else {
                                        "w-full h-full object-cover scale-100"
                                    }
                                }
                            />
                            <div class="absolute inset-0 bg-gradient-to-r from-brand-900/95 via-brand-800/70 to-transparent"></div>
                            <div class="absolute inset-0 bg-black/40"></div>
                        </div>
                    }
                })
                .collect_view()}

            // Manual prev/next arrows
            <button
                class="absolute left-4 z-30 p-2 rounded-full bg-white/10 text-white hover:bg-white/20 hidden md:block"
                aria-label="Previous slide"
                on:click=move |_| set_rotator.update(Rotator::retreat)
            >
                "‹"
            </button>
            <button
                class="absolute right-4 z-30 p-2 rounded-full bg-white/10 text-white hover:bg-white/20 hidden md:block"
                aria-label="Next slide"
                on:click=move |_| set_rotator.update(Rotator::advance)
            >
                "›"
            </button>

            // Indicator dots, one per slide
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-30 flex space-x-2">
                {HERO_SLIDES
                    .iter()
                    .enumerate()
                    .map(|(index, _)| {
                        view! {
                            <button
                                aria-label=format!("Go to slide {}", index + 1)
                                class=move || {
                                    if rotator.get().current() == index {
                                        "w-8 h-2 rounded-full bg-accent-500 transition-all"
                                    } else {
                                        "w-2 h-2 rounded-full bg-white/50 hover:bg-white transition-all"
                                    }
                                }
                                on:click=move |_| set_rotator.update(move |r| r.jump_to(index))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative z-20 container mx-auto px-4 text-white">
                <div class=move || {
                    format!("max-w-3xl flex flex-col {}", current_slide().align.css_class())
                }>
                    <span class="px-4 py-1 mb-6 rounded-full bg-white/10 border border-white/20 text-sm font-semibold">
                        "5-Star Rated Real Estate"
                    </span>
                    <h1 class="text-4xl md:text-7xl font-serif font-bold mb-6 leading-tight">
                        {COMPANY_INFO.slogan}
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-white to-brand-200">
                            {move || current_slide().title}
                        </span>
                    </h1>
                    <p class="text-lg md:text-2xl text-brand-50 mb-10 max-w-2xl font-light">
                        {move || current_slide().subtitle}
                        ". Join thousands of happy landowners. From Ksh 280K plots to premium listings in Thika."
                    </p>

                    // Search box: free text in, listings route out
                    <div class="bg-white/10 p-3 rounded-xl max-w-xl border border-white/20 flex flex-col md:flex-row gap-2">
                        <input
                            type="text"
                            placeholder="Search (e.g. Makutano, acre, commercial)..."
                            class="flex-grow h-12 px-4 rounded-lg bg-white/90 text-gray-900 focus:outline-none font-medium"
                            prop:value=move || search_text.get()
                            on:input=move |ev| set_search_text.set(event_target_value(&ev))
                            on:keydown=submit_on_enter
                        />
                        <button
                            class="bg-accent-600 hover:bg-accent-700 text-white px-8 py-3 rounded-lg font-bold whitespace-nowrap"
                            on:click=submit_on_click
                        >
                            "Find Plot"
                        </button>
                    </div>

                    <div class="mt-8 flex flex-wrap gap-4 text-sm font-bold text-white/90 uppercase">
                        <span>"✓ Ready Titles"</span>
                        <span>"✓ Site Visits Daily"</span>
                        <span>"✓ Flexible Payments"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
