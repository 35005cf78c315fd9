use super::*;

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon grid.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher button.
pub fn DesktopIconButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] accent: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=title
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-accent=accent
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Window stack host; children paint in document order.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] hidden: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-hidden=move || bool_token(hidden.get())
            data-ui-maximized=move || bool_token(maximized.get())
        >
            {children()}
        </section>
    }
}

#[component]
/// Draggable window header strip.
pub fn WindowTitleBar(
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon + label cluster inside a window title bar.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
/// Control-button cluster inside a window title bar.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// One titlebar control button (minimize / maximize / close).
pub fn WindowControlButton(
    icon: IconName,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] danger: bool,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-danger=bool_token(danger)
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                on_click.call(ev);
            }
        >
            <Icon icon size=IconSize::Xs />
        </button>
    }
}

#[component]
/// Scrollable window content region hosting the app view.
pub fn WindowBody(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-body" data-ui-primitive="true" data-ui-kind="window-body">
            {children()}
        </div>
    }
}

#[component]
/// Floating dock strip anchored to the bottom of the desktop.
pub fn Dock(children: Children) -> impl IntoView {
    view! {
        <nav class="ui-dock" data-ui-primitive="true" data-ui-kind="dock" aria-label="Dock">
            <div class="ui-dock-tray">{children()}</div>
        </nav>
    }
}

#[component]
/// One dock launcher button with a hover tooltip label.
pub fn DockButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] accent: Option<String>,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    let tooltip = label.clone();

    view! {
        <button
            type="button"
            class="ui-dock-button"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-accent=accent
            on:click=move |ev| on_click.call(ev)
        >
            {children()}
            <span class="ui-dock-tooltip" aria-hidden="true">{tooltip}</span>
        </button>
    }
}

#[component]
/// Translucent status strip pinned to the top of the desktop.
pub fn SystemBar(children: Children) -> impl IntoView {
    view! {
        <div class="ui-system-bar" data-ui-primitive="true" data-ui-kind="system-bar">
            {children()}
        </div>
    }
}

#[component]
/// Pill-shaped grouping inside the system bar.
pub fn SystemBarGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-system-bar-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="system-bar-group"
        >
            {children()}
        </div>
    }
}
