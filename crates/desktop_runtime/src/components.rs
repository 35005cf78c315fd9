//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod system_bar;
mod window;

use leptos::*;

use self::{dock::DesktopDock, system_bar::DesktopSystemBar, window::DesktopWindow};
use crate::{
    catalog,
    frame::PointerPoint,
    reducer::ShellAction,
    runtime_context::use_desktop_runtime,
};
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, Icon, IconSize,
};

pub use crate::runtime_context::{DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: system bar, icon grid, window layer, and
/// dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let policy = runtime.config.minimize_policy;

    view! {
        <div class="desktop-shell" data-ui-primitive="true" data-ui-kind="desktop-root">
            <DesktopBackdrop>
                <div class="desktop-aurora" aria-hidden="true">
                    <span class="aurora-blob aurora-a"></span>
                    <span class="aurora-blob aurora-b"></span>
                    <span class="aurora-blob aurora-c"></span>
                    <span class="aurora-blob aurora-d"></span>
                </div>

                <DesktopSystemBar />

                <DesktopIconGrid>
                    {catalog::desktop_apps()
                        .into_iter()
                        .map(|app| {
                            view! {
                                <DesktopIconButton
                                    title=app.name.to_string()
                                    accent=app.accent.to_string()
                                    on_click=Callback::new(move |_| {
                                        runtime
                                            .dispatch_action(ShellAction::Open(app.open_request()));
                                    })
                                >
                                    <span class="desktop-icon-badge">
                                        <Icon icon=app.icon size=IconSize::Lg />
                                    </span>
                                    <span class="desktop-icon-label">{app.name}</span>
                                </DesktopIconButton>
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || state.get().mounted_windows(policy)
                        key=|entry| entry.id.clone()
                        let:entry
                    >
                        <DesktopWindow window_id=entry.id />
                    </For>
                </DesktopWindowLayer>

                <DesktopDock />
            </DesktopBackdrop>
        </div>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPoint {
    PointerPoint {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
