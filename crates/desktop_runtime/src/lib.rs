//! Desktop shell runtime: the window registry, presentation units, and
//! launcher surfaces.

pub mod catalog;
pub mod components;
pub mod frame;
pub mod host;
pub mod model;
pub mod reducer;

mod runtime_context;

pub use components::DesktopShell;
pub use model::{MinimizePolicy, OpenWindowRequest, ShellState, WindowEntry};
pub use reducer::{reduce_shell, ShellAction};
pub use runtime_context::{
    use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, ShellConfig,
};
