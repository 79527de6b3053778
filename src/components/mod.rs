// Reusable UI pieces shared between pages

mod property_card;

pub use property_card::PropertyCard;
