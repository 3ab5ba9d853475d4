//! Localized strings for `folio-ui`.
//!
//! Messages live in `i18n/en-US/folio-ui.ftl` and are embedded at compile
//! time. Components look them up through [`t!`](crate::t) after
//! [`init`] has run once at app start:
//!
//! ```ignore
//! crate::i18n::init();
//! let label = crate::t!("nav-home");
//! let error = crate::t!("gallery-error", reason = "timeout");
//! ```
//!
//! The browser build asks `navigator.languages` for preferences; anything not
//! embedded falls back to en-US.

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Lookup through the shared [`LOADER`]; keys are checked at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match the FTL file name (`i18n/en-US/{DOMAIN}.ftl`).
const DOMAIN: &str = "folio-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the embedded bundles. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("failed selecting languages ({err}); continuing with fallback");
        }
        // Placeholder values are shown verbatim, without bidi isolation marks.
        LOADER.set_use_isolating(false);
    });
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
