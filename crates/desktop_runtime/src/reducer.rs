//! Registry actions and the transition function applied by the shell.

use app_contract::AppId;

use crate::model::{OpenWindowRequest, ShellState};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Open a window, or surface it when one with the same id is already
    /// registered.
    Open(OpenWindowRequest),
    /// Remove a window from the registry.
    Close {
        /// Window to close.
        id: AppId,
    },
    /// Hide a window without destroying its entry.
    Minimize {
        /// Window to minimize.
        id: AppId,
    },
    /// Reveal a minimized window.
    Restore {
        /// Window to restore.
        id: AppId,
    },
}

/// Applies a [`ShellAction`] to the registry.
///
/// Actions referencing an unknown id are no-ops by contract, not errors:
/// launcher surfaces and window controls may race a close, and tolerating
/// stale ids keeps every mutation a single synchronous step.
pub fn reduce_shell(state: &mut ShellState, action: ShellAction) {
    match action {
        ShellAction::Open(request) => request.apply(state),
        ShellAction::Close { id } => {
            state.windows.retain(|entry| entry.id != id);
        }
        ShellAction::Minimize { id } => {
            if let Some(entry) = state.windows.iter_mut().find(|entry| entry.id == id) {
                entry.minimized = true;
            }
        }
        ShellAction::Restore { id } => {
            if let Some(entry) = state.windows.iter_mut().find(|entry| entry.id == id) {
                entry.minimized = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use app_contract::ViewHandle;
    use leptos::IntoView;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::MinimizePolicy;

    fn request(id: &str, title: &str) -> OpenWindowRequest {
        OpenWindowRequest {
            id: AppId::trusted(id),
            title: title.to_string(),
            icon: ViewHandle::new(|| ().into_view()),
            content: ViewHandle::new(|| ().into_view()),
        }
    }

    fn open(state: &mut ShellState, id: &str) {
        reduce_shell(state, ShellAction::Open(request(id, id)));
    }

    fn ids(state: &ShellState) -> Vec<&str> {
        state
            .windows
            .iter()
            .map(|entry| entry.id.as_str())
            .collect()
    }

    #[test]
    fn open_is_idempotent_per_id() {
        let mut state = ShellState::default();
        open(&mut state, "calculator");
        open(&mut state, "calculator");

        assert_eq!(ids(&state), vec!["calculator"]);
        assert!(!state.windows[0].minimized);
    }

    #[test]
    fn reopening_surfaces_without_replacing_the_entry() {
        let mut state = ShellState::default();
        let first = request("notes", "Notes");
        let original_content = first.content.clone();
        reduce_shell(&mut state, ShellAction::Open(first));
        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                id: AppId::trusted("notes"),
            },
        );

        reduce_shell(&mut state, ShellAction::Open(request("notes", "Replaced")));

        let entry = state.window(&AppId::trusted("notes")).expect("entry");
        assert!(!entry.minimized);
        assert_eq!(entry.title, "Notes");
        assert_eq!(entry.content, original_content);
    }

    #[test]
    fn close_removes_and_close_again_is_a_noop() {
        let mut state = ShellState::default();
        open(&mut state, "browser");

        reduce_shell(
            &mut state,
            ShellAction::Close {
                id: AppId::trusted("browser"),
            },
        );
        assert_eq!(ids(&state), Vec::<&str>::new());

        reduce_shell(
            &mut state,
            ShellAction::Close {
                id: AppId::trusted("browser"),
            },
        );
        assert_eq!(ids(&state), Vec::<&str>::new());
    }

    #[test]
    fn minimize_hides_and_restore_reveals() {
        let mut state = ShellState::default();
        open(&mut state, "calculator");

        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                id: AppId::trusted("calculator"),
            },
        );
        assert_eq!(state.visible_windows().count(), 0);

        reduce_shell(
            &mut state,
            ShellAction::Restore {
                id: AppId::trusted("calculator"),
            },
        );
        assert_eq!(state.visible_windows().count(), 1);
    }

    #[test]
    fn minimize_and_restore_of_unknown_ids_are_noops() {
        let mut state = ShellState::default();
        open(&mut state, "notes");
        let before = state.clone();

        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                id: AppId::trusted("ghost"),
            },
        );
        reduce_shell(
            &mut state,
            ShellAction::Restore {
                id: AppId::trusted("ghost"),
            },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn reopen_after_full_close_appends_at_end() {
        let mut state = ShellState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        reduce_shell(
            &mut state,
            ShellAction::Close {
                id: AppId::trusted("a"),
            },
        );
        open(&mut state, "a");

        assert_eq!(ids(&state), vec!["b", "a"]);
    }

    #[test]
    fn reopen_while_still_present_keeps_position() {
        let mut state = ShellState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                id: AppId::trusted("a"),
            },
        );
        open(&mut state, "a");

        assert_eq!(ids(&state), vec!["a", "b"]);
        assert!(!state.windows[0].minimized);
    }

    #[test]
    fn minimize_policy_controls_the_mounted_set() {
        let mut state = ShellState::default();
        open(&mut state, "a");
        open(&mut state, "b");
        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                id: AppId::trusted("a"),
            },
        );

        let kept = state.mounted_windows(MinimizePolicy::KeepMounted);
        assert_eq!(
            kept.iter().map(|entry| entry.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );

        let unmounted = state.mounted_windows(MinimizePolicy::Unmount);
        assert_eq!(
            unmounted
                .iter()
                .map(|entry| entry.id.as_str())
                .collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[test]
    fn open_minimize_restore_close_scenario() {
        let mut state = ShellState::default();
        open(&mut state, "calculator");
        assert_eq!(ids(&state), vec!["calculator"]);
        assert!(!state.windows[0].minimized);

        reduce_shell(
            &mut state,
            ShellAction::Minimize {
                id: AppId::trusted("calculator"),
            },
        );
        assert_eq!(state.visible_windows().count(), 0);

        reduce_shell(
            &mut state,
            ShellAction::Restore {
                id: AppId::trusted("calculator"),
            },
        );
        assert_eq!(state.visible_windows().count(), 1);

        reduce_shell(
            &mut state,
            ShellAction::Close {
                id: AppId::trusted("calculator"),
            },
        );
        assert_eq!(ids(&state), Vec::<&str>::new());
    }
}
