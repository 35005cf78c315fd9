//! Browser app: a tab strip over sandboxed iframes.
//!
//! Cross-origin page content is opaque to the shell; every tab renders into
//! an isolated sandboxed frame.

pub mod model;

use leptos::*;
use system_ui::{IconButton, IconName, TextField};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use model::{display_host, toggle_favorite, TabStrip, NEW_TAB_URL};

const IFRAME_SANDBOX: &str = "allow-same-origin allow-scripts allow-popups allow-forms";

fn iframe_dom_id(tab_id: u64) -> String {
    format!("browser-iframe-{tab_id}")
}

fn reload_iframe(tab_id: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&iframe_dom_id(tab_id)) else {
            return;
        };
        let Ok(iframe) = element.dyn_into::<web_sys::HtmlIFrameElement>() else {
            return;
        };
        iframe.set_src(&iframe.src());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = tab_id;
}

#[component]
/// Browser window contents.
pub fn BrowserApp() -> impl IntoView {
    let strip = create_rw_signal(TabStrip::new());
    let url_input = create_rw_signal(NEW_TAB_URL.to_string());
    let favorites = create_rw_signal(vec![
        "https://www.google.com".to_string(),
        "https://www.github.com".to_string(),
        "https://www.wikipedia.org".to_string(),
    ]);

    let navigate_to = move |url: String| {
        url_input.set(url.clone());
        strip.update(|strip| strip.navigate(url));
    };

    let is_favorite =
        move || favorites.get().iter().any(|fav| fav == &url_input.get());

    view! {
        <div class="app app-browser">
            <div class="browser-tabs" role="tablist">
                <For each=move || strip.get().tabs().to_vec() key=|tab| tab.id let:tab>
                    {{
                        let tab_id = tab.id;
                        view! {
                            <div
                                class="browser-tab"
                                role="tab"
                                data-active=move || (strip.get().active_id() == tab_id).to_string()
                            >
                                <button
                                    type="button"
                                    class="browser-tab-select"
                                    on:click=move |_| {
                                        strip.update(|strip| strip.select(tab_id));
                                        url_input.set(strip.get_untracked().active_tab().url.clone());
                                    }
                                >
                                    {move || {
                                        strip
                                            .get()
                                            .tabs()
                                            .iter()
                                            .find(|tab| tab.id == tab_id)
                                            .map(|tab| tab.title.clone())
                                            .unwrap_or_default()
                                    }}
                                </button>
                                <IconButton
                                    icon=IconName::Dismiss
                                    icon_size=system_ui::IconSize::Xs
                                    layout_class="browser-tab-close"
                                    aria_label="Close tab"
                                    on_click=Callback::new(move |_| {
                                        strip.update(|strip| strip.close_tab(tab_id));
                                        url_input.set(strip.get_untracked().active_tab().url.clone());
                                    })
                                />
                            </div>
                        }
                    }}
                </For>
                <IconButton
                    icon=IconName::Add
                    layout_class="browser-tab-add"
                    aria_label="New tab"
                    on_click=Callback::new(move |_| {
                        strip.update(|strip| {
                            strip.open_tab();
                        });
                        url_input.set(NEW_TAB_URL.to_string());
                    })
                />
            </div>

            <div class="browser-toolbar">
                <div class="browser-nav">
                    <IconButton
                        icon=IconName::ArrowLeft
                        aria_label="Back"
                        disabled=true
                    />
                    <IconButton
                        icon=IconName::ArrowRight
                        aria_label="Forward"
                        disabled=true
                    />
                    <IconButton
                        icon=IconName::ArrowClockwise
                        aria_label="Reload"
                        on_click=Callback::new(move |_| {
                            reload_iframe(strip.get_untracked().active_id());
                        })
                    />
                    <IconButton
                        icon=IconName::Home
                        aria_label="Home"
                        on_click=Callback::new(move |_| navigate_to(NEW_TAB_URL.to_string()))
                    />
                </div>
                <TextField
                    layout_class="browser-url-field"
                    placeholder="Enter URL..."
                    aria_label="Address"
                    value=Signal::derive(move || url_input.get())
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        url_input.set(event_target_value(&ev));
                    })
                    on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            navigate_to(url_input.get_untracked());
                        }
                    })
                />
                {move || {
                    let icon = if is_favorite() {
                        IconName::StarFilled
                    } else {
                        IconName::Star
                    };
                    view! {
                        <IconButton
                            icon=icon
                            aria_label="Toggle favorite"
                            pressed=is_favorite()
                            on_click=Callback::new(move |_| {
                                favorites.update(|favorites| {
                                    toggle_favorite(favorites, &url_input.get_untracked());
                                });
                            })
                        />
                    }
                }}
            </div>

            <Show when=move || !favorites.get().is_empty() fallback=|| ()>
                <div class="browser-favorites">
                    <span class="browser-favorites-label">"Favorites:"</span>
                    <For each=move || favorites.get() key=|fav| fav.clone() let:fav>
                        {{
                            let url = fav.clone();
                            view! {
                                <button
                                    type="button"
                                    class="browser-favorite-chip"
                                    on:click=move |_| navigate_to(url.clone())
                                >
                                    {display_host(&fav)}
                                </button>
                            }
                        }}
                    </For>
                </div>
            </Show>

            <div class="browser-content">
                <For each=move || strip.get().tabs().to_vec() key=|tab| tab.id let:tab>
                    {{
                        let tab_id = tab.id;
                        let src = {
                            let strip = strip;
                            move || {
                                strip
                                    .get()
                                    .tabs()
                                    .iter()
                                    .find(|tab| tab.id == tab_id)
                                    .map(|tab| tab.url.clone())
                                    .unwrap_or_default()
                            }
                        };
                        view! {
                            <iframe
                                id=iframe_dom_id(tab_id)
                                class="browser-frame"
                                src=src
                                title=tab.title.clone()
                                sandbox=IFRAME_SANDBOX
                                style=move || {
                                    if strip.get().active_id() == tab_id {
                                        ""
                                    } else {
                                        "display:none;"
                                    }
                                }
                            ></iframe>
                        }
                    }}
                </For>
            </div>
        </div>
    }
}
