use std::ops::Deref;
use std::rc::Rc;

use api::HttpApi;
use dioxus::prelude::*;

use super::animate::{self, Generation};
use super::{
    download_update, view_updates, CounterDisplay, CounterUpdate, MetricsDisplay, StatsClient,
};
use crate::core::countup::CountUp;
use crate::core::timing;
use crate::t;

/// Shared handle to the page's [`StatsClient`], passed to each widget as a prop.
#[derive(Clone)]
pub struct StatsHandle(Rc<StatsClient<HttpApi>>);

impl StatsHandle {
    pub fn new(api: HttpApi) -> Self {
        Self(Rc::new(StatsClient::new(api)))
    }
}

impl Deref for StatsHandle {
    type Target = StatsClient<HttpApi>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for StatsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

async fn run_count_up(
    mut display: Signal<CounterDisplay>,
    generation: Generation,
    token: u64,
    plan: CountUp,
) {
    animate::drive(
        plan,
        &generation,
        token,
        timing::now_ms,
        |value| display.set(CounterDisplay::Value(value)),
        || timing::sleep_ms(timing::FRAME_MS),
    )
    .await;
}

/// Tokens are claimed in response order, before any task is spawned.
fn apply_update(mut display: Signal<CounterDisplay>, generation: &Generation, update: CounterUpdate) {
    match update {
        CounterUpdate::Animate(plan) => {
            let token = generation.claim();
            spawn(run_count_up(display, generation.clone(), token, plan));
        }
        CounterUpdate::Placeholder => {
            generation.claim();
            display.set(CounterDisplay::Placeholder);
        }
        CounterUpdate::Keep => {}
    }
}

/// View and download counters plus the resume download control.
///
/// Records a view once per mount. The download control is a plain anchor,
/// so the browser's download proceeds whatever the counter endpoint does.
#[component]
pub fn StatsPanel(stats: StatsHandle, resume_href: String, resume_filename: String) -> Element {
    let views = use_signal(CounterDisplay::default);
    let downloads = use_signal(CounterDisplay::default);
    let views_gen = use_hook(Generation::default);
    let downloads_gen = use_hook(Generation::default);

    use_hook({
        let stats = stats.clone();
        let views_gen = views_gen.clone();
        let downloads_gen = downloads_gen.clone();
        move || {
            spawn(async move {
                let result = stats.record_view().await;
                let [views_update, downloads_update] = view_updates(&result);
                apply_update(views, &views_gen, views_update);
                apply_update(downloads, &downloads_gen, downloads_update);
            })
        }
    });

    let on_download = move |_| {
        let stats = stats.clone();
        let downloads_gen = downloads_gen.clone();
        spawn(async move {
            let result = stats.record_download().await;
            let update = download_update(*downloads.peek(), &result);
            apply_update(downloads, &downloads_gen, update);
        });
    };

    rsx! {
        div { class: "stats",
            div { class: "stats__item",
                span { id: "visitor-count", class: "stats__value", "{views().text()}" }
                span { class: "stats__label", {t!("stats-views")} }
            }
            div { class: "stats__item",
                span { id: "download-count", class: "stats__value", "{downloads().text()}" }
                span { class: "stats__label", {t!("stats-downloads")} }
            }
            a {
                id: "download-resume-btn",
                class: "button button--primary",
                href: "{resume_href}",
                download: "{resume_filename}",
                onclick: on_download,
                {t!("stats-download-resume")}
            }
        }
    }
}

/// Status dot whose tooltip shows endpoint latency and request volume.
/// Metrics are requested on the first hover only.
#[component]
pub fn StatusIndicator(stats: StatsHandle) -> Element {
    let mut display = use_signal(MetricsDisplay::default);

    let on_hover = move |_| {
        let stats = stats.clone();
        spawn(async move {
            let fetch = stats.fetch_metrics().await;
            let next = MetricsDisplay::from_fetch(*display.peek(), &fetch);
            display.set(next);
        });
    };

    let current = display();

    rsx! {
        div { class: "status-indicator", onmouseenter: on_hover,
            span { class: "status-indicator__dot", aria_hidden: "true" }
            span { class: "status-indicator__label", {t!("status-label")} }
            div { class: "status-tooltip", role: "tooltip",
                div { class: "status-tooltip__row",
                    span { {t!("status-latency")} }
                    span { id: "tooltip-latency", "{current.latency_text()}" }
                }
                div { class: "status-tooltip__row",
                    span { {t!("status-requests")} }
                    span { id: "tooltip-requests", "{current.requests_text()}" }
                }
            }
        }
    }
}
