//! Shared UI crate for the Hange AI landing page: copy tables, locale
//! resolution, the signup hand-off and the page components.

pub mod config;
pub mod content;
pub mod core;
pub mod handoff;
pub mod i18n;
pub mod views;

pub mod components {
    mod icon;
    pub use icon::icon_glyph;

    // Header & language switch
    mod locale_toggle;
    mod site_header;
    pub use locale_toggle::LocaleToggle;
    pub use site_header::SiteHeader;

    // Page sections, top to bottom
    mod features;
    mod hero;
    mod how_it_works;
    mod signup;
    mod site_footer;
    mod stats;
    mod testimonials;
    pub use features::FeatureGrid;
    pub use hero::Hero;
    pub use how_it_works::HowItWorks;
    pub use signup::Signup;
    pub use site_footer::SiteFooter;
    pub use stats::StatTiles;
    pub use testimonials::Testimonials;
}
