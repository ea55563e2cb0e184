//! Fixed copy and contact details for the landing page.

pub const BUSINESS_NAME: &str = "Wildrose Painters";
pub const ESTABLISHED: u16 = 2020;
pub const TAGLINE: &str = "Quality & Budget-Friendly Painting Services";
pub const SERVICE_AREA: &str = "Proudly serving the Greater Edmonton Area and surrounding communities";

pub const PHONE_DISPLAY: &str = "(587) 501-6994";
pub const PHONE_HREF: &str = "tel:5875016994";
pub const WEBSITE_DISPLAY: &str = "www.wildrosepainters.ca";
pub const WEBSITE_URL: &str = "https://www.wildrosepainters.ca";

pub const LOGO_SRC: &str = "/logo.jpg";
/// Stand-in for service cards that have no photo.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
    pub image: Option<&'static str>,
}

impl ServiceOffering {
    pub fn image_src(&self) -> &'static str {
        self.image.unwrap_or(PLACEHOLDER_IMAGE)
    }
}

pub const SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        title: "Fence Painting & Staining",
        description: "Professional fence painting and staining services with summer discounts. \
                      Quality finishes that protect and beautify your outdoor space.",
        badge: Some("Summer Special"),
        image: Some("/images/fence-staining.jpg"),
    },
    ServiceOffering {
        title: "Deck Staining & Sealing",
        description: "Expert deck staining and sealing to protect your outdoor living area. \
                      Special summer pricing on all deck projects.",
        badge: Some("Summer Special"),
        image: Some("/images/deck-staining.jpg"),
    },
    ServiceOffering {
        title: "Interior Painting",
        description: "Transform your indoor spaces with professional interior painting. \
                      We can do renovating and decorating too!",
        badge: None,
        image: Some("/images/interior-painting.jpg"),
    },
];

/// Icon names map to inline glyphs in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    Award,
    Check,
    Clock,
    Phone,
    Mail,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sparkles => "✦",
            Icon::Award => "★",
            Icon::Check => "✔",
            Icon::Clock => "◷",
            Icon::Phone => "☎",
            Icon::Mail => "✉",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Differentiator {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DIFFERENTIATORS: [Differentiator; 5] = [
    Differentiator {
        icon: Icon::Sparkles,
        title: "Quality-Focused Approach",
        description: "We never compromise on quality. Every project receives meticulous attention \
                      to detail and professional craftsmanship that lasts.",
    },
    Differentiator {
        icon: Icon::Award,
        title: "Premium Materials",
        description: "We exclusively use top-tier Sherwin Williams and Dulux paints, ensuring \
                      superior coverage, durability, and finish.",
    },
    Differentiator {
        icon: Icon::Check,
        title: "Budget-Friendly Pricing",
        description: "Competitive rates that respect your budget without sacrificing quality. \
                      Get the best value for your investment.",
    },
    Differentiator {
        icon: Icon::Clock,
        title: "Timely Completion",
        description: "We respect your time and schedule. Projects are completed efficiently \
                      without rushing the quality of our work.",
    },
    Differentiator {
        icon: Icon::Phone,
        title: "Responsive Communication",
        description: "Quick responses to calls and texts. We're here to answer your questions \
                      and keep you informed throughout the project.",
    },
];

pub const ABOUT_LEAD: &str = "Established in 2020, Wildrose Painters has been serving the Greater \
                              Edmonton Area with quality painting services.";

pub const ABOUT_BODY: [&str; 2] = [
    "We're a locally-owned painting company dedicated to transforming homes and businesses with \
     professional craftsmanship. Our mission is simple: deliver exceptional quality at \
     competitive prices that fit your budget.",
    "Whether you need your fence refreshed, your deck protected, or your interior spaces \
     renovated, we bring the same level of attention to detail and commitment to excellence to \
     every project. We believe quality painting shouldn't break the bank, which is why we offer \
     budget-friendly solutions without compromising on results.",
];

pub const ABOUT_CLOSER: &str = "Quality is of our utmost importance. Every brush stroke matters.";
