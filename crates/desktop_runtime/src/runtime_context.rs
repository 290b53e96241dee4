//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI composition
//! stays in [`crate::components`].

use leptos::*;

use crate::{
    apps, effect_executor,
    model::{AppId, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback. The only writer of `state` and `interaction`.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Windows to open on first render, in order. The last one ends up focused.
    #[prop(optional)]
    initial_windows: Vec<AppId>,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut ui, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    for id in initial_windows {
        runtime.dispatch_action(DesktopAction::OpenWindow(apps::default_open_request(id)));
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
