// Landing page sections

mod cta;
mod featured;
mod footer;
mod hero;
mod nav;
mod services;
mod values;

pub use cta::SiteVisitCta;
pub use featured::FeaturedProperties;
pub use footer::Footer;
pub use hero::{Hero, start_auto_advance};
pub use nav::Nav;
pub use services::Services;
pub use values::CoreValues;
