//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{model::AppId, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// DOM id of a window's frame element.
pub fn window_frame_dom_id(id: AppId) -> String {
    format!("desktop-window-{}", id.as_str())
}

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before running so effects that dispatch enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(id) => focus_window_input(id),
    }
}

/// Focuses the window's `[data-autofocus]` control, or the frame itself, after the next paint.
fn focus_window_input(id: AppId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_frame_dom_id(id);
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(frame) = document.get_element_by_id(&dom_id) else {
                logging::warn!("focus target `{dom_id}` not mounted");
                return;
            };
            let target = frame
                .query_selector("[data-autofocus]")
                .ok()
                .flatten()
                .unwrap_or(frame);
            if let Ok(element) = target.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}
