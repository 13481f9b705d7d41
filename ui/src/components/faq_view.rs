use dioxus::prelude::*;

use landing_common::faq::{Accordion, FaqEntry, FaqId};

use super::markdown::render_markdown;
use super::site_content::use_site_content;
use super::transition::Transition;

/// FAQ section of the landing page.
#[component]
pub fn FaqView() -> Element {
    let content = use_site_content();
    let entries = content.read().faq.clone();
    let mut in_view = use_signal(|| false);

    let intro_class = Transition::SlideFromLeft.class(in_view());
    let panel_class = Transition::SlideFromRight.class(in_view());

    rsx! {
        section {
            class: "faq-section",
            onmounted: move |_| in_view.set(true),
            div { class: "faq-intro {intro_class}",
                h4 { class: "eyebrow", "OUR FAQS" }
                h2 {
                    "Frequently Asked "
                    span { class: "title-highlight", "Questions" }
                }
            }
            div { class: "faq-card {panel_class}",
                DisclosurePanel { entries }
            }
        }
    }
}

/// Single-open accordion over `entries`. The first entry starts expanded.
#[component]
pub fn DisclosurePanel(entries: Vec<FaqEntry>) -> Element {
    let mut accordion = use_signal(|| Accordion::new(&entries));

    // Toggle through the write guard so each click sees the latest state.
    let toggle = move |id: FaqId| {
        let result = accordion.write().toggle(id);
        match result {
            Ok(active) => tracing::debug!(%id, ?active, "FAQ entry toggled"),
            Err(err) => tracing::warn!("Ignoring FAQ toggle: {err}"),
        }
    };

    let rows: Vec<(FaqEntry, bool)> = accordion
        .read()
        .rows(&entries)
        .map(|(entry, expanded)| (entry.clone(), expanded))
        .collect();

    rsx! {
        div { class: "faq-list",
            for (entry, expanded) in rows {
                FaqItem {
                    key: "{entry.id}",
                    entry: entry.clone(),
                    expanded,
                    on_toggle: toggle,
                }
            }
        }
    }
}

#[component]
fn FaqItem(entry: FaqEntry, expanded: bool, on_toggle: EventHandler<FaqId>) -> Element {
    let id = entry.id;
    let mut revealed = use_signal(|| false);

    let onclick = move |_: MouseEvent| {
        revealed.set(false);
        on_toggle.call(id);
    };

    if !expanded {
        return rsx! {
            div { class: "faq-item",
                button {
                    class: "faq-question",
                    r#type: "button",
                    aria_expanded: "false",
                    aria_controls: "faq-answer-{id}",
                    onclick,
                    span { "{entry.question}" }
                    span { class: "faq-chevron", "▸" }
                }
            }
        };
    }

    let answer_html = render_markdown(&entry.answer);
    let reveal_class = Transition::Reveal.class(revealed());

    rsx! {
        div { class: "faq-item open",
            button {
                class: "faq-question",
                r#type: "button",
                aria_expanded: "true",
                aria_controls: "faq-answer-{id}",
                onclick,
                span { "{entry.question}" }
                span { class: "faq-chevron", "▾" }
            }
            div {
                id: "faq-answer-{id}",
                class: "faq-answer {reveal_class}",
                onmounted: move |_| revealed.set(true),
                dangerous_inner_html: "{answer_html}",
            }
        }
    }
}
