//! Marketing site for Provision Land & Properties — Leptos CSR.
//!
//! Client-side rendered single-page site: an auto-advancing hero carousel,
//! a plot search box that routes to the listings page, and static service
//! and property highlight sections. All content comes from [`constants`];
//! nothing is fetched or persisted.

pub mod carousel;
pub mod components;
pub mod constants;
pub mod pages;
pub mod search;
pub mod sections;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{HomePage, PropertiesPage};
use sections::{Footer, Nav};

/// Root component: nav/footer shell around the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                <Nav />
                <main class="flex-grow">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/properties") view=PropertiesPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="py-24 text-center">
            <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
            <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
            <a href="/" class="px-6 py-3 bg-brand-600 text-white rounded-lg hover:bg-brand-700">
                "Back to Home"
            </a>
        </div>
    }
}
