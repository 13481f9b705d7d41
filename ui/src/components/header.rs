use dioxus::prelude::*;

use landing_common::menu::{LinkTarget, MenuEntry, NavState};

use super::site_content::use_site_content;

/// Site header: logo, hamburger toggle, menu with one dropdown level and the
/// action area.
///
/// `current_path` is the path of the active route; leaf links whose path is
/// exactly equal to it get the `active` class.
#[component]
pub fn NavigationBar(current_path: String) -> Element {
    let content = use_site_content();
    let mut nav = use_signal(NavState::new);

    let state = content.read();
    let brand = state.brand.clone();
    let menu = state.menu.clone();
    let call_to_action = state.call_to_action.clone();
    let repository = state.repository.clone();
    drop(state);

    let NavState {
        mobile_panel_open,
        dropdown_open,
    } = nav();

    let bars_class = if mobile_panel_open {
        "hamburger-bars cross"
    } else {
        "hamburger-bars"
    };
    let panel_class = if mobile_panel_open {
        "nav-panel open"
    } else {
        "nav-panel"
    };

    let toggle_dropdown = move |_: ()| {
        let open = nav.write().toggle_dropdown();
        tracing::debug!(open, "Dropdown toggled");
    };
    let follow_leaf = move |_: ()| {
        nav.write().follow_leaf_link();
        tracing::debug!("Leaf link followed, mobile panel closed");
    };

    rsx! {
        header { class: "site-header",
            div { class: "header-inner",
                div { class: "header-bar",
                    a { class: "brand", href: "{brand.home_path}",
                        img {
                            src: "{brand.logo}",
                            alt: "{brand.name}",
                            width: "60",
                            height: "30",
                        }
                    }
                    button {
                        class: "hamburger",
                        r#type: "button",
                        aria_label: "Toggle navigation",
                        aria_expanded: "{mobile_panel_open}",
                        onclick: move |_| {
                            let open = nav.write().toggle_mobile_panel();
                            tracing::debug!(open, "Mobile panel toggled");
                        },
                        span { class: bars_class,
                            span { class: "bar" }
                            span { class: "bar" }
                            span { class: "bar" }
                        }
                    }
                }

                div { class: panel_class,
                    nav {
                        ul { class: "menu",
                            for entry in menu {
                                MenuItem {
                                    key: "{entry.title}",
                                    entry: entry.clone(),
                                    current_path: current_path.clone(),
                                    dropdown_open,
                                    on_toggle_dropdown: toggle_dropdown,
                                    on_follow_leaf: follow_leaf,
                                }
                            }
                        }
                    }
                    div { class: "nav-actions",
                        if let Some(cta) = call_to_action {
                            a {
                                class: "cta-button",
                                href: "{cta.href}",
                                target: LinkTarget::from_new_tab(cta.new_tab).as_attr(),
                                "{cta.label}"
                            }
                        }
                        if let Some(repo) = repository {
                            a {
                                class: "repo-link",
                                href: "{repo}",
                                target: LinkTarget::NewTab.as_attr(),
                                rel: "noopener noreferrer",
                                "GitHub"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItem(
    entry: MenuEntry,
    current_path: String,
    dropdown_open: bool,
    on_toggle_dropdown: EventHandler,
    on_follow_leaf: EventHandler,
) -> Element {
    if !entry.has_submenu() {
        return rsx! {
            li { class: "menu-item",
                MenuLink { entry, current_path, on_follow: on_follow_leaf }
            }
        };
    }

    let dropdown_class = if dropdown_open { "dropdown open" } else { "dropdown" };
    let children = entry.children().to_vec();

    rsx! {
        li { class: "menu-item has-submenu",
            button {
                class: "submenu-label",
                r#type: "button",
                aria_haspopup: "true",
                aria_expanded: "{dropdown_open}",
                onclick: move |_| on_toggle_dropdown.call(()),
                "{entry.title}"
                span { class: "submenu-chevron", "▾" }
            }
            ul { class: dropdown_class,
                for child in children {
                    li { key: "{child.title}", class: "dropdown-item",
                        MenuLink {
                            entry: child.clone(),
                            current_path: current_path.clone(),
                            on_follow: on_follow_leaf,
                        }
                    }
                }
            }
        }
    }
}

/// A leaf link. Following it closes the mobile panel.
#[component]
fn MenuLink(entry: MenuEntry, current_path: String, on_follow: EventHandler) -> Element {
    let class = if entry.is_active(&current_path) {
        "menu-link active"
    } else {
        "menu-link"
    };

    rsx! {
        Link {
            class,
            to: entry.href(),
            new_tab: entry.link_target() == LinkTarget::NewTab,
            onclick: move |_| on_follow.call(()),
            "{entry.title}"
        }
    }
}
