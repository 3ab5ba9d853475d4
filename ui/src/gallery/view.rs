use std::collections::HashSet;

use api::{ApiConfig, HttpApi};
use dioxus::prelude::*;
use tracing::warn;

use super::{GalleryClient, GalleryState, Lightbox, ViewerKey, ViewerMode};
use crate::core::platform;
use crate::t;

fn viewer_key(key: &Key) -> Option<ViewerKey> {
    match key {
        Key::ArrowLeft => Some(ViewerKey::Previous),
        Key::ArrowRight => Some(ViewerKey::Next),
        Key::Escape => Some(ViewerKey::Close),
        _ => None,
    }
}

/// Move the viewer to `next`, pinning page scroll while it is open.
fn transition(mut viewer: Signal<Lightbox>, next: Lightbox) {
    let was_open = viewer.peek().is_open();
    viewer.set(next);
    if was_open != next.is_open() {
        platform::set_scroll_locked(next.is_open());
    }
}

/// Photo grid fed by the gallery endpoint, fetched once per mount.
#[component]
pub fn Gallery(config: ApiConfig, #[props(default)] mode: ViewerMode) -> Element {
    let mut state = use_signal(GalleryState::default);
    let hidden = use_signal(HashSet::<usize>::new);
    let viewer = use_signal(Lightbox::default);

    use_hook(move || {
        let client = GalleryClient::new(HttpApi::new(config));
        spawn(async move {
            let next = client.load().await;
            state.set(next);
        })
    });

    use_drop(|| platform::set_scroll_locked(false));

    let current = state();

    rsx! {
        div { id: "gallery-grid", class: "gallery-grid",
            {match &current {
                GalleryState::Loading => rsx! {
                    div { class: "gallery-loader", {t!("gallery-loading")} }
                },
                GalleryState::Empty => rsx! {
                    div { class: "gallery-loader", {t!("gallery-empty")} }
                },
                GalleryState::Failed(reason) => rsx! {
                    div { class: "gallery-loader error", {t!("gallery-error", reason = reason.clone())} }
                },
                GalleryState::Ready(images) => rsx! {
                    for (index, url) in images.iter().enumerate() {
                        {render_cell(index, url.clone(), mode, hidden, viewer, images.len())}
                    }
                },
            }}
        }

        if mode == ViewerMode::Lightbox {
            {render_lightbox(viewer, current.images().to_vec())}
        }
    }
}

fn render_cell(
    index: usize,
    url: String,
    mode: ViewerMode,
    mut hidden: Signal<HashSet<usize>>,
    viewer: Signal<Lightbox>,
    len: usize,
) -> Element {
    let is_hidden = hidden.read().contains(&index);
    let open_url = url.clone();
    let failed_url = url.clone();

    rsx! {
        div {
            key: "{index}",
            class: "gallery-item",
            style: if is_hidden { "display:none" } else { "" },
            onclick: move |_| match mode {
                ViewerMode::Lightbox => transition(viewer, Lightbox::open(index, len)),
                ViewerMode::NewTab => platform::open_in_new_tab(&open_url),
            },
            img {
                src: "{url}",
                alt: "Photography",
                "loading": "lazy",
                onerror: move |_| {
                    warn!(url = %failed_url, "failed to load image");
                    hidden.write().insert(index);
                },
            }
        }
    }
}

fn render_lightbox(viewer: Signal<Lightbox>, images: Vec<String>) -> Element {
    let len = images.len();
    let Some(url) = viewer().index().and_then(|index| images.get(index).cloned()) else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "lightbox",
            class: "lightbox",
            tabindex: 0,
            role: "dialog",
            aria_modal: "true",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| transition(viewer, Lightbox::Closed),
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(key) = viewer_key(&evt.key()) {
                    evt.prevent_default();
                    let next = viewer.peek().on_key(key, len);
                    transition(viewer, next);
                }
            },
            span {
                class: "close-lightbox",
                aria_label: "Close",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    transition(viewer, Lightbox::Closed);
                },
                "×"
            }
            img {
                id: "lightbox-img",
                class: "lightbox-content",
                src: "{url}",
                alt: "Photography",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
            }
            button {
                r#type: "button",
                class: "lightbox-prev",
                aria_label: "Previous",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    let next = viewer.peek().navigate(-1, len);
                    transition(viewer, next);
                },
                "❮"
            }
            button {
                r#type: "button",
                class: "lightbox-next",
                aria_label: "Next",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    let next = viewer.peek().navigate(1, len);
                    transition(viewer, next);
                },
                "❯"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_and_escape_keys_map_to_viewer_keys() {
        assert_eq!(viewer_key(&Key::ArrowLeft), Some(ViewerKey::Previous));
        assert_eq!(viewer_key(&Key::ArrowRight), Some(ViewerKey::Next));
        assert_eq!(viewer_key(&Key::Escape), Some(ViewerKey::Close));
        assert_eq!(viewer_key(&Key::Enter), None);
    }
}
