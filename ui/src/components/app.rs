use dioxus::prelude::*;

use landing_common::content::SiteContent;

use super::faq_view::FaqView;
use super::header::NavigationBar;
use super::site_content::load_site_content;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/pricing")]
    Pricing {},
    #[route("/docs")]
    Docs {},
    #[route("/blog")]
    Blog {},
    #[route("/support")]
    Support {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let loaded = use_hook(load_site_content);

    let body = match loaded {
        Ok(content) => rsx! { Site { content } },
        Err(message) => rsx! {
            div { class: "content-error",
                h1 { "Site content could not be loaded" }
                p { "{message}" }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        {body}
    }
}

#[component]
fn Site(content: SiteContent) -> Element {
    use_context_provider(|| Signal::new(content));

    rsx! { Router::<Route> {} }
}

#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        NavigationBar { current_path }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}

/// Route component: landing page with the FAQ section.
#[component]
fn Home() -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Plan, ship and review in one place" }
        }
        FaqView {}
    }
}

#[component]
fn Pricing() -> Element {
    rsx! { PageStub { title: "Pricing" } }
}

#[component]
fn Docs() -> Element {
    rsx! { PageStub { title: "Docs" } }
}

#[component]
fn Blog() -> Element {
    rsx! { PageStub { title: "Blog" } }
}

#[component]
fn Support() -> Element {
    rsx! { PageStub { title: "Support" } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the home page" }
        }
    }
}

/// Placeholder body for pages whose content is managed elsewhere.
#[component]
fn PageStub(title: String) -> Element {
    rsx! {
        section { class: "page-stub",
            h1 { "{title}" }
        }
    }
}
