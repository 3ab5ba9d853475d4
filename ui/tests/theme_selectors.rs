#![cfg(test)]
/*!
Theme selector lint.

Components in this crate address the shared theme (`ui/assets/theme/main.css`)
by class name only. A substring presence check catches a refactor that drops
or renames a selector the markup still relies on, which would otherwise be a
silent styling regression (a lightbox without `position: fixed` is unusable).

If you intentionally rename a selector, update the component markup and this
list together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "[data-theme=\"light\"]",
    "body {",
    ".page {",
    ".glass-card",
    "scroll-behavior: smooth",
    // Buttons
    ".button {",
    ".button--primary",
    // Counters and status tooltip
    ".stats__value",
    ".stats__label",
    ".status-indicator",
    ".status-tooltip",
    ".status-tooltip__row",
    // Gallery
    ".gallery-grid",
    ".gallery-item",
    ".gallery-loader",
    ".gallery-loader.error",
    // Lightbox
    ".lightbox {",
    ".lightbox-content",
    ".close-lightbox",
    ".lightbox-prev",
    ".lightbox-next",
    // Navbar state
    ".theme-toggle",
    ".mobile-menu-btn",
    ".mobile-active",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or path change?"
    );
}

#[test]
fn navbar_styles_cover_markup() {
    for sel in [".navbar {", ".navbar__inner", ".navbar__links", ".navbar__link", ".navbar__actions"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css lacks {sel}");
    }
}
