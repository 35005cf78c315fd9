use std::time::Duration;

use leptos::*;
use platform_host::AuthService;
use system_ui::{Icon, IconName, IconSize, SystemBar, SystemBarGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        Self { hour: 0, minute: 0 }
    }

    fn formatted(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[component]
/// Status strip across the top of the desktop: user chip, radios, clock.
pub(super) fn DesktopSystemBar() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let user_label = auth
        .current_user()
        .map(|user| user.display_name().to_string())
        .unwrap_or_else(|| "User".to_string());

    let now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <SystemBar>
            <SystemBarGroup layout_class="system-bar-user">
                <span class="system-bar-avatar" aria-hidden="true">
                    <Icon icon=IconName::Person size=IconSize::Md />
                </span>
                <span class="system-bar-user-name">{user_label}</span>
            </SystemBarGroup>
            <SystemBarGroup layout_class="system-bar-status">
                <Icon icon=IconName::Wifi size=IconSize::Md />
                <Icon icon=IconName::Battery size=IconSize::Md />
                <span class="system-bar-clock">{move || now.get().formatted()}</span>
            </SystemBarGroup>
        </SystemBar>
    }
}
