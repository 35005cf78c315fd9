//! Runtime provider and context wiring for the desktop shell.
//!
//! The registry is an owned object injected at construction time and
//! exposed to descendants through Leptos context. Nothing here is
//! process-global, so independent desktop instances can coexist in tests.

use leptos::*;
use platform_host::HostServices;

use crate::{
    host::DesktopHostContext,
    model::{MinimizePolicy, ShellState},
    reducer::{reduce_shell, ShellAction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shell configuration fixed at provider construction.
pub struct ShellConfig {
    /// What happens to a minimized window's presentation unit.
    pub minimize_policy: MinimizePolicy,
}

#[derive(Clone, Copy)]
/// Leptos context for reading registry state and dispatching
/// [`ShellAction`] values from any launcher or window in the view tree.
pub struct DesktopRuntimeContext {
    /// Reactive registry state signal.
    pub state: RwSignal<ShellState>,
    /// Shell configuration.
    pub config: ShellConfig,
    /// Browser environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Registry dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a registry action through the context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] and the host service bundle to
/// descendant components.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Shell configuration.
    #[prop(default = ShellConfig::default())]
    config: ShellConfig,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(ShellState::default());
    let host = store_value(DesktopHostContext::new());

    let dispatch = Callback::new(move |action: ShellAction| {
        logging::debug_warn!("shell action: {action:?}");
        let mut shell = state.get_untracked();
        reduce_shell(&mut shell, action);
        state.set(shell);
    });

    let runtime = DesktopRuntimeContext {
        state,
        config,
        host,
        dispatch,
    };

    provide_context(runtime);
    provide_context(host_services.auth.clone());

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`] — a wiring mistake, not a
/// recoverable runtime fault.
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
