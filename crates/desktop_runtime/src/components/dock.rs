use leptos::*;
use system_ui::{Dock, DockButton, Icon, IconSize};

use crate::{catalog, reducer::ShellAction, runtime_context::use_desktop_runtime};

#[component]
/// The dock launcher surface: a filtered view over the canonical catalog.
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Dock>
            {catalog::dock_apps()
                .into_iter()
                .map(|app| {
                    view! {
                        <DockButton
                            label=app.name.to_string()
                            accent=app.accent.to_string()
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(ShellAction::Open(app.open_request()));
                            })
                        >
                            <Icon icon=app.icon size=IconSize::Lg />
                        </DockButton>
                    }
                })
                .collect_view()}
        </Dock>
    }
}
