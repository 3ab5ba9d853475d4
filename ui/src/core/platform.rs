//! Thin wrappers over the few document-level effects the components need.
//! Outside the browser they only log.

use super::theme::Theme;

#[cfg(target_arch = "wasm32")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
}

/// Set `<body data-theme=...>`.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    if let Some(body) = body() {
        if body.set_attribute("data-theme", theme.as_attr()).is_err() {
            tracing::warn!("failed to set data-theme on body");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(theme: Theme) {
    tracing::debug!(theme = theme.as_attr(), "apply_theme (no document)");
}

/// Pin (or release) background scrolling while an overlay is open.
#[cfg(target_arch = "wasm32")]
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let value = if locked { "hidden" } else { "auto" };
        if body.style().set_property("overflow", value).is_err() {
            tracing::warn!(locked, "failed to set body overflow");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_scroll_locked(locked: bool) {
    tracing::debug!(locked, "set_scroll_locked (no document)");
}

/// Open `url` in a new browsing context.
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(_))) {
        tracing::warn!(%url, "failed to open image in a new tab");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(url: &str) {
    tracing::debug!(%url, "open_in_new_tab (no window)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_effects_are_inert_without_a_browser() {
        apply_theme(Theme::Light);
        set_scroll_locked(true);
        set_scroll_locked(false);
        open_in_new_tab("https://img.test/a.jpg");
    }
}
