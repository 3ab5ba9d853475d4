use crate::core::platform;
use crate::core::storage::BrowserStore;
use crate::core::theme::{self, Theme};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied nav links.
///
/// `ui` does not know the platform crate's `Route` enum, so the platform
/// registers one builder per link; each receives the localized label and
/// returns a `Link` containing it. Without a builder the navbar renders its
/// `children` instead.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     gallery: |label| rsx!( Link { class: "navbar__link", to: Route::GalleryPage {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub gallery: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    // Preference is read once per mount and written on every toggle.
    let mut theme_pref = use_signal(|| theme::load_theme(&BrowserStore));
    let mut menu_open = use_signal(|| false);

    use_effect(move || platform::apply_theme(theme_pref()));

    let on_theme_toggle = move |_| {
        let current: Theme = theme_pref();
        theme_pref.set(theme::toggle_theme(&BrowserStore, current));
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let gallery = (b.gallery)(&t!("nav-gallery"));
        rsx! {
            {home}
            {gallery}
        }
    });

    let links_class = if menu_open() {
        "navbar__links nav-links mobile-active"
    } else {
        "navbar__links nav-links"
    };
    let menu_icon = if menu_open() { "fas fa-times" } else { "fas fa-bars" };
    let theme_icon = format!("fas {}", theme_pref().icon_class());

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", {t!("brand-name")} }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                // Clicking any link closes the mobile menu.
                nav {
                    class: links_class,
                    onclick: move |_| menu_open.set(false),
                    if let Some(nav) = internal_nav {
                        {nav}
                    } else {
                        {children}
                    }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "theme-toggle",
                        aria_label: t!("nav-theme-toggle"),
                        onclick: on_theme_toggle,
                        i { class: "{theme_icon}" }
                    }
                    button {
                        r#type: "button",
                        class: "mobile-menu-btn",
                        aria_label: t!("nav-menu-toggle"),
                        aria_expanded: if menu_open() { "true" } else { "false" },
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        i { class: menu_icon }
                    }
                }
            }
        }
    }
}
