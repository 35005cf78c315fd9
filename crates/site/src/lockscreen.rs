//! Lock screen: a clock face that opens into the sign-in/sign-up form.

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;
use platform_host::HostServices;
use system_ui::{Icon, IconName, IconSize, TextField};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LockClockSnapshot {
    hour: u32,
    minute: u32,
    weekday: usize,
    month: usize,
    day: u32,
}

impl LockClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                weekday: date.get_day() as usize % 7,
                month: date.get_month() as usize % 12,
                day: date.get_date(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        Self {
            hour: 0,
            minute: 0,
            weekday: 4,
            month: 0,
            day: 1,
        }
    }

    fn time_text(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    fn date_text(self) -> String {
        format!("{}, {} {}", WEEKDAYS[self.weekday], MONTHS[self.month], self.day)
    }
}

#[component]
/// Full-screen lock surface in front of the desktop route.
pub fn LockscreenPage() -> impl IntoView {
    let auth = expect_context::<HostServices>().auth;
    let navigate = use_navigate();

    let known_email = auth.current_user().map(|user| user.email);
    let email = create_rw_signal(known_email.clone().unwrap_or_default());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let busy = create_rw_signal(false);
    let show_form = create_rw_signal(false);
    let sign_up_mode = create_rw_signal(false);

    let now = create_rw_signal(LockClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || now.set(LockClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let key_listener = window_event_listener(ev::keydown, move |_| {
        if !show_form.get_untracked() {
            show_form.set(true);
        }
    });
    on_cleanup(move || key_listener.remove());

    let submit = {
        let auth = auth.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(None);

            let auth = auth.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let email_value = email.get_untracked();
                let password_value = password.get_untracked();
                let result = if sign_up_mode.get_untracked() {
                    auth.sign_up(&email_value, &password_value).await
                } else {
                    auth.sign_in(&email_value, &password_value).await
                };

                match result {
                    Ok(_) => navigate("/desktop", Default::default()),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        password.set(String::new());
                        busy.set(false);
                    }
                }
            });
        }
    };

    let has_known_user = known_email.is_some();
    let heading = {
        let known_email = known_email.clone();
        move || {
            if let Some(known) = known_email.clone() {
                known
            } else if sign_up_mode.get() {
                "Create Account".to_string()
            } else {
                "Sign In".to_string()
            }
        }
    };
    let submit_label = move || {
        if busy.get() {
            "Please wait...".to_string()
        } else if has_known_user {
            "Unlock".to_string()
        } else if sign_up_mode.get() {
            "Create Account".to_string()
        } else {
            "Sign In".to_string()
        }
    };

    view! {
        <div class="lock-screen">
            <div class="desktop-aurora" aria-hidden="true">
                <span class="aurora-blob aurora-a"></span>
                <span class="aurora-blob aurora-b"></span>
                <span class="aurora-blob aurora-c"></span>
            </div>

            <div class="lock-content">
                <div class="lock-clock" data-raised=move || show_form.get().to_string()>
                    <h1 class="lock-clock-time">{move || now.get().time_text()}</h1>
                    <p class="lock-clock-date">{move || now.get().date_text()}</p>
                </div>

                <Show when=move || !show_form.get() fallback=|| ()>
                    <p class="lock-hint">"Press any key to unlock"</p>
                </Show>

                <Show when=move || show_form.get() fallback=|| ()>
                    <div class="lock-panel">
                        <div class="lock-panel-identity">
                            <span class="lock-panel-avatar" aria-hidden="true">
                                {if has_known_user {
                                    view! { <Icon icon=IconName::Lock size=IconSize::Lg /> }
                                } else {
                                    view! { <Icon icon=IconName::Person size=IconSize::Lg /> }
                                }}
                            </span>
                            <p class="lock-panel-heading">{heading.clone()}</p>
                        </div>

                        <form class="lock-form" on:submit=submit.clone()>
                            <Show when=move || !has_known_user fallback=|| ()>
                                <TextField
                                    input_type="email"
                                    placeholder="Email"
                                    aria_label="Email"
                                    autofocus=true
                                    required=true
                                    value=Signal::derive(move || email.get())
                                    on_input=Callback::new(move |ev: web_sys::Event| {
                                        email.set(event_target_value(&ev));
                                    })
                                />
                            </Show>

                            <TextField
                                input_type="password"
                                placeholder="Password"
                                aria_label="Password"
                                autofocus=has_known_user
                                required=true
                                value=Signal::derive(move || password.get())
                                on_input=Callback::new(move |ev: web_sys::Event| {
                                    password.set(event_target_value(&ev));
                                })
                            />

                            {move || {
                                error.get().map(|message| {
                                    view! { <div class="lock-error" role="alert">{message}</div> }
                                })
                            }}

                            <button
                                type="submit"
                                class="ui-button lock-submit"
                                data-ui-variant="accent"
                                data-ui-size="lg"
                                disabled=move || busy.get()
                            >
                                {submit_label}
                            </button>
                        </form>

                        <Show when=move || !has_known_user fallback=|| ()>
                            <button
                                type="button"
                                class="lock-mode-toggle"
                                on:click=move |_| sign_up_mode.update(|mode| *mode = !*mode)
                            >
                                {move || {
                                    if sign_up_mode.get() {
                                        "Have an account? Sign in"
                                    } else {
                                        "Need an account? Sign up"
                                    }
                                }}
                            </button>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}
