// Routed pages

mod home;
mod properties;

pub use home::HomePage;
pub use properties::PropertiesPage;
