use super::state::{
    CompteFormAction, CompteFormState, Effect, SubmitMode, MSG_CONFIRM_DELETE,
};
use crate::domain::a001_compte::api;
use crate::shared::dialogs;
use leptos::prelude::*;

/// ViewModel for the compte form. All state changes go through `dispatch`.
#[derive(Clone, Copy)]
pub struct CompteFormViewModel {
    pub state: RwSignal<CompteFormState>,
}

impl Default for CompteFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CompteFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CompteFormState::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.with(|s| s.is_edit_mode())
    }

    pub fn dispatch(&self, action: CompteFormAction) {
        // the signal is gone once the component is unmounted; late responses are dropped
        let Some(effects) = self.state.try_update(|s| s.reduce(action)) else {
            return;
        };
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let vm = *self;
        match effect {
            Effect::FetchAll => wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_comptes().await {
                    Ok(comptes) => vm.dispatch(CompteFormAction::FetchSucceeded(comptes)),
                    Err(e) => vm.dispatch(CompteFormAction::FetchFailed(e.to_string())),
                }
            }),
            Effect::Create(compte) => wasm_bindgen_futures::spawn_local(async move {
                let result = api::create_compte(&compte).await;
                vm.finish_submit(SubmitMode::Create, result);
            }),
            Effect::Update(id, compte) => wasm_bindgen_futures::spawn_local(async move {
                let result = api::update_compte(id, &compte).await;
                vm.finish_submit(SubmitMode::Update(id), result);
            }),
            Effect::Delete(id) => wasm_bindgen_futures::spawn_local(async move {
                match api::delete_compte(id).await {
                    Ok(()) => vm.dispatch(CompteFormAction::DeleteSucceeded(id)),
                    Err(e) => vm.dispatch(CompteFormAction::DeleteFailed {
                        id,
                        reason: e.to_string(),
                    }),
                }
            }),
            Effect::ConfirmDelete(id) => {
                let confirmed = dialogs::confirm(MSG_CONFIRM_DELETE);
                self.dispatch(CompteFormAction::DeleteAnswered { id, confirmed });
            }
            Effect::Notify(message) => dialogs::alert(message),
        }
    }

    fn finish_submit(&self, mode: SubmitMode, result: Result<(), api::ApiError>) {
        match result {
            Ok(()) => self.dispatch(CompteFormAction::SubmitSucceeded(mode)),
            Err(e) => self.dispatch(CompteFormAction::SubmitFailed {
                mode,
                reason: e.to_string(),
            }),
        }
    }
}
