// Home page - hero carousel + highlights

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::sections::{CoreValues, FeaturedProperties, Hero, Services, SiteVisitCta};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home - Provision Land Limited | Land for Sale in Kenya" />
        <Meta
            name="description"
            content="Find your dream plot with Provision Land Limited. Genuine, affordable land in Thika, Makutano, Sagana, and Machakos with ready title deeds."
        />
        <Hero />
        <Services />
        <FeaturedProperties />
        <CoreValues />
        <SiteVisitCta />
    }
}
