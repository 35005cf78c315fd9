use app_contract::AppId;
use leptos::*;

use super::pointer_from_pointer_event;
use crate::{
    frame::{DragSession, FrameState},
    reducer::ShellAction,
    runtime_context::use_desktop_runtime,
};
use system_ui::{
    IconName, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

#[component]
/// One presentation unit: the movable frame for a registered window.
///
/// Position, size, and the maximize toggle are local state; they reset when
/// the unit remounts. Visibility stays registry-driven through the entry's
/// `minimized` flag.
pub(super) fn DesktopWindow(window_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let Some(entry) = runtime.state.get_untracked().window(&window_id).cloned() else {
        return ().into_view();
    };

    let frame = create_rw_signal(FrameState::default());
    let drag = create_rw_signal(None::<DragSession>);

    let hidden = {
        let id = window_id.clone();
        Signal::derive(move || {
            runtime
                .state
                .get()
                .window(&id)
                .map(|entry| entry.minimized)
                .unwrap_or(true)
        })
    };

    let style = Signal::derive(move || {
        let state = frame.get();
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;{}",
            state.rect.x,
            state.rect.y,
            state.rect.w,
            state.rect.h,
            if hidden.get() { "display:none;" } else { "" }
        )
    });

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        let pointer = pointer_from_pointer_event(&ev);
        if let Some(session) = frame.get_untracked().begin_drag(pointer) {
            drag.set(Some(session));
        }
    };

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if let Some(session) = drag.get_untracked() {
            let pointer = pointer_from_pointer_event(&ev);
            frame.update(|state| state.rect = session.rect_at(pointer));
        }
    });
    on_cleanup(move || move_listener.remove());

    let end_drag = move |_: web_sys::PointerEvent| {
        if drag.get_untracked().is_some() {
            drag.set(None);
        }
    };
    let up_listener = window_event_listener(ev::pointerup, end_drag);
    on_cleanup(move || up_listener.remove());
    let cancel_listener = window_event_listener(ev::pointercancel, end_drag);
    on_cleanup(move || cancel_listener.remove());

    let minimize = {
        let id = window_id.clone();
        Callback::new(move |_| {
            runtime.dispatch_action(ShellAction::Minimize { id: id.clone() });
        })
    };
    let close = {
        let id = window_id.clone();
        Callback::new(move |_| {
            runtime.dispatch_action(ShellAction::Close { id: id.clone() });
        })
    };
    let toggle_maximize = Callback::new(move |_| {
        let viewport = runtime.host.get_value().viewport_rect();
        frame.update(|state| state.toggle_maximize(viewport));
    });

    let icon_view = entry.icon.render();
    let content_view = entry.content.render();

    view! {
        <WindowFrame
            style=style
            aria_label=entry.title.clone()
            hidden=hidden
            maximized=Signal::derive(move || frame.get().maximized)
        >
            <WindowTitleBar on_pointerdown=Callback::new(begin_move)>
                <WindowTitle>
                    <span class="ui-window-app-icon" aria-hidden="true">{icon_view}</span>
                    <span>{entry.title.clone()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimize window"
                        on_click=minimize
                    />
                    {move || {
                        if frame.get().maximized {
                            view! {
                                <WindowControlButton
                                    icon=IconName::WindowRestore
                                    aria_label="Restore window"
                                    on_click=toggle_maximize
                                />
                            }
                        } else {
                            view! {
                                <WindowControlButton
                                    icon=IconName::WindowMaximize
                                    aria_label="Maximize window"
                                    on_click=toggle_maximize
                                />
                            }
                        }
                    }}
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window"
                        danger=true
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{content_view}</WindowBody>
        </WindowFrame>
    }
    .into_view()
}
