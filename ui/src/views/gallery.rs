use api::ApiConfig;
use dioxus::prelude::*;

use crate::gallery::{Gallery, ViewerMode};

#[component]
pub fn GalleryPage() -> Element {
    let config = use_hook(ApiConfig::from_build_env);

    rsx! {
        section { class: "page page-gallery",
            h1 { {crate::t!("gallery-title")} }
            p { {crate::t!("gallery-intro")} }
            Gallery { config, mode: ViewerMode::Lightbox }
        }
    }
}
