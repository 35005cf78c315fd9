use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host::{AuthService, HostServices};

use crate::lockscreen::LockscreenPage;

fn build_host_services() -> HostServices {
    #[cfg(target_arch = "wasm32")]
    let auth = AuthService::new(platform_host::BrowserAuthBackend::new());

    #[cfg(not(target_arch = "wasm32"))]
    let auth = AuthService::new(platform_host::MemoryAuthBackend::new());

    HostServices::new(auth)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    provide_context(build_host_services());

    view! {
        <Title text="Nimbus" />
        <Meta name="description" content="A glassy desktop-style shell that runs in the browser." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=LockscreenPage />
                    <Route path="/desktop" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host_services = expect_context::<HostServices>();

    if host_services.auth.current_user().is_none() {
        return view! { <Redirect path="/" /> }.into_view();
    }

    view! {
        <DesktopProvider host_services>
            <DesktopShell />
        </DesktopProvider>
    }
    .into_view()
}
