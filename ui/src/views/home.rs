use api::{ApiConfig, HttpApi};
use dioxus::prelude::*;

use crate::stats::{StatsHandle, StatsPanel, StatusIndicator};

/// Resume landing page. Owns the page's stats client so the counters and the
/// status tooltip share one session.
#[component]
pub fn Home() -> Element {
    let config = use_hook(ApiConfig::from_build_env);
    let stats = use_hook({
        let config = config.clone();
        move || StatsHandle::new(HttpApi::new(config))
    });

    rsx! {
        section { class: "page page-home",
            div { id: "about", class: "hero glass-card",
                h1 { {crate::t!("home-title")} }
                p { class: "hero__tagline", {crate::t!("home-tagline")} }
                p { {crate::t!("home-intro")} }

                StatsPanel {
                    stats: stats.clone(),
                    resume_href: config.resume_href.clone(),
                    resume_filename: config.resume_filename.clone(),
                }
            }

            footer { class: "page-home__footer",
                StatusIndicator { stats }
                p { class: "page-home__footer-note", {crate::t!("home-footer")} }
            }
        }
    }
}
