//! Site content: company details, hero slides, services, and the property
//! catalogue. Everything here is read-only and lives for the whole session;
//! the UI never mutates it.

/// Horizontal placement of a slide's overlay copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn css_class(self) -> &'static str {
        match self {
            Align::Left => "items-start text-left",
            Align::Center => "items-center text-center",
            Align::Right => "items-end text-right",
        }
    }
}

/// One hero carousel entry.
#[derive(Clone, Copy, Debug)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub align: Align,
}

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Property {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub size: &'static str,
    pub price_ksh: u64,
    pub category: &'static str,
    pub image: &'static str,
}

impl Property {
    /// Case-insensitive match against the fields a buyer would search by.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self.size.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }

    /// Price with thousands separators, e.g. `Ksh 280,000`.
    pub fn price_display(&self) -> String {
        let digits = self.price_ksh.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("Ksh {grouped}")
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub slogan: &'static str,
    pub phone_primary: &'static str,
    pub phone_secondary: &'static str,
}

pub static COMPANY_INFO: CompanyInfo = CompanyInfo {
    name: "Provision Land & Properties Ltd",
    slogan: "Own Genuine Land.",
    phone_primary: "0797 331 355",
    phone_secondary: "0727 774 279",
};

pub static HERO_SLIDES: &[Slide] = &[
    Slide {
        image: "/carousel1.png",
        title: "Choose the Best",
        subtitle: "We Promise and Deliver Genuinely",
        align: Align::Left,
    },
    Slide {
        image: "/carousel2.png",
        title: "Trusted by Thousands",
        subtitle: "Your Title Deed is Ready",
        align: Align::Center,
    },
    Slide {
        image: "/carousel3.png",
        title: "Genuine Documentation",
        subtitle: "Hassle-free Transfer Process",
        align: Align::Center,
    },
    Slide {
        image: "/carousel4.png",
        title: "Free Site Visits",
        subtitle: "Every Saturday - Join Us!",
        align: Align::Right,
    },
    Slide {
        image: "/carousel5.png",
        title: "Prime Locations",
        subtitle: "Makutano, Ithanga, Thika",
        align: Align::Center,
    },
    Slide {
        image: "/carousel6.png",
        title: "Tola Estate Ngoingwa",
        subtitle: "Premium Residential Plots",
        align: Align::Left,
    },
    Slide {
        image: "/carousel7.png",
        title: "Invest Today",
        subtitle: "Secure Your Future",
        align: Align::Right,
    },
];

pub static SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Land Selling",
        description: "Genuine, affordable plots in Thika, Makutano, Sagana and \
                      Machakos — every parcel surveyed and verified before listing.",
    },
    Service {
        id: 2,
        title: "Title Processing",
        description: "We handle the full transfer at the lands registry so your \
                      title deed is ready, clean and in your name.",
    },
    Service {
        id: 3,
        title: "Site Visits",
        description: "Free guided site visits every Saturday, plus daily trips on \
                      request to Matuu, Thika and Ithanga.",
    },
    Service {
        id: 4,
        title: "Property Consultancy",
        description: "Honest advice on where and when to buy, flexible payment \
                      plans, and after-sale support.",
    },
];

pub static PROPERTIES: &[Property] = &[
    Property {
        id: 1,
        title: "Tola Estate Ngoingwa",
        location: "Ngoingwa, Thika",
        size: "50x100",
        price_ksh: 1_950_000,
        category: "residential",
        image: "/property-ngoingwa.jpg",
    },
    Property {
        id: 2,
        title: "Makutano Gateway Plots",
        location: "Makutano, Mwea",
        size: "50x100",
        price_ksh: 280_000,
        category: "residential",
        image: "/property-makutano.jpg",
    },
    Property {
        id: 3,
        title: "Sagana Riverside Commercial",
        location: "Sagana Town",
        size: "100x100",
        price_ksh: 1_200_000,
        category: "commercial",
        image: "/property-sagana.jpg",
    },
    Property {
        id: 4,
        title: "Ithanga Farm Blocks",
        location: "Ithanga, Murang'a",
        size: "1 acre",
        price_ksh: 650_000,
        category: "agricultural",
        image: "/property-ithanga.jpg",
    },
    Property {
        id: 5,
        title: "Matuu Highway Parcels",
        location: "Matuu, Machakos",
        size: "50x100",
        price_ksh: 350_000,
        category: "residential",
        image: "/property-matuu.jpg",
    },
    Property {
        id: 6,
        title: "Thika Greens Annex",
        location: "Thika",
        size: "40x80",
        price_ksh: 850_000,
        category: "residential",
        image: "/property-thika.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn property_ids_are_unique() {
        let mut ids: Vec<u32> = PROPERTIES.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROPERTIES.len());
    }

    #[test]
    fn service_ids_are_unique() {
        let mut ids: Vec<u32> = SERVICES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn matches_is_case_insensitive_over_fields() {
        let ithanga = &PROPERTIES[3];
        assert!(ithanga.matches("ithanga"));
        assert!(ithanga.matches("acre"));
        assert!(ithanga.matches("agricultural"));
        assert!(!ithanga.matches("sagana"));
    }

    #[test]
    fn price_display_groups_thousands() {
        assert_eq!(PROPERTIES[1].price_display(), "Ksh 280,000");
        assert_eq!(PROPERTIES[0].price_display(), "Ksh 1,950,000");
        let cheap = Property { price_ksh: 999, ..PROPERTIES[1] };
        assert_eq!(cheap.price_display(), "Ksh 999");
    }
}
