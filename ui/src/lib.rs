//! Shared UI crate for Folio. Page logic and views live here; platform crates
//! only provide routing and launch.

pub mod core;
pub mod gallery;
pub mod i18n;
pub mod stats;
pub mod views;

pub mod components {
    // Localized site navbar with theme toggle and mobile menu (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

use dioxus::prelude::*;

/// Shared site theme (colours, layout, gallery and lightbox styling).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
