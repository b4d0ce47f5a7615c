//! Transient toast notification raised after form submits.
//!
//! Pages set `UiState::toast` and this host renders it, clearing it again
//! after a short delay in the browser.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// Milliseconds a toast stays visible before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_DISMISS_MS: u64 = 2500;

/// Renders the current toast, if any, at the top of the viewport.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Auto-dismiss timer, restarted whenever a new toast appears. The
    // timer remembers which toast it was started for, so a timer left over
    // from a replaced toast cannot clear its successor.
    Effect::new(move || {
        let Some(id) = ui.get().toast.as_ref().map(|t| t.id) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS))
                    .await;
                ui.update(|u| u.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    move || {
        ui.get().toast.map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast--success",
                ToastKind::Error => "toast toast--error",
            };
            view! {
                <div class=class role="status">
                    {toast.message}
                </div>
            }
        })
    }
}
