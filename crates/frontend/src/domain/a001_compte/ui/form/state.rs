use contracts::domain::a001_compte::{Compte, CompteId, CompteType};

pub const MSG_ADDED: &str = "Compte ajouté avec succès.";
pub const MSG_UPDATED: &str = "Compte modifié avec succès.";
pub const MSG_DELETED: &str = "Compte supprimé avec succès.";
pub const MSG_SUBMIT_FAILED: &str = "Erreur lors de la soumission.";
pub const MSG_CONFIRM_DELETE: &str = "Êtes-vous sûr de vouloir supprimer ce compte ?";

/// Editable fields of the form, by their input `name`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompteField {
    Solde,
    DateCreation,
    Type,
}

impl CompteField {
    pub fn name(&self) -> &'static str {
        match self {
            CompteField::Solde => "solde",
            CompteField::DateCreation => "dateCreation",
            CompteField::Type => "type",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "solde" => Some(CompteField::Solde),
            "dateCreation" => Some(CompteField::DateCreation),
            "type" => Some(CompteField::Type),
            _ => None,
        }
    }
}

/// Which request a submit issued; captured when the request starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(CompteId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompteFormAction {
    Mounted,
    FieldChanged { name: String, value: String },
    Submit,
    SubmitSucceeded(SubmitMode),
    SubmitFailed { mode: SubmitMode, reason: String },
    Edit(CompteId),
    Cancel,
    DeleteRequested(CompteId),
    /// Answer to the confirmation dialog
    DeleteAnswered { id: CompteId, confirmed: bool },
    DeleteSucceeded(CompteId),
    DeleteFailed { id: CompteId, reason: String },
    FetchSucceeded(Vec<Compte>),
    FetchFailed(String),
}

/// Side effects requested by the reducer, executed by the view model
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchAll,
    Create(Compte),
    Update(CompteId, Compte),
    Delete(CompteId),
    ConfirmDelete(CompteId),
    Notify(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompteFormState {
    pub draft: Compte,
    pub comptes: Vec<Compte>,
    /// `None` means create mode
    pub editing_id: Option<CompteId>,
    pub error: Option<String>,
}

impl CompteFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Code shown by the type `<select>`
    pub fn selected_type_code(&self) -> &'static str {
        self.draft.compte_type.code()
    }

    pub fn reduce(&mut self, action: CompteFormAction) -> Vec<Effect> {
        match action {
            CompteFormAction::Mounted => vec![Effect::FetchAll],
            CompteFormAction::FieldChanged { name, value } => {
                self.apply_field(&name, &value);
                Vec::new()
            }
            CompteFormAction::Submit => self.submit(),
            CompteFormAction::SubmitSucceeded(mode) => {
                self.reset();
                let message = match mode {
                    SubmitMode::Create => MSG_ADDED,
                    SubmitMode::Update(_) => MSG_UPDATED,
                };
                vec![Effect::Notify(message), Effect::FetchAll]
            }
            CompteFormAction::SubmitFailed { mode, reason } => {
                log::error!("Submit {:?} failed: {}", mode, reason);
                self.error = Some(MSG_SUBMIT_FAILED.to_string());
                Vec::new()
            }
            CompteFormAction::Edit(id) => {
                match self.comptes.iter().find(|c| c.id == Some(id)) {
                    Some(compte) => {
                        self.draft = compte.clone();
                        self.editing_id = Some(id);
                    }
                    None => log::warn!("Compte {} not found in the current list, edit ignored", id),
                }
                Vec::new()
            }
            CompteFormAction::Cancel => {
                self.reset();
                Vec::new()
            }
            CompteFormAction::DeleteRequested(id) => vec![Effect::ConfirmDelete(id)],
            CompteFormAction::DeleteAnswered { id, confirmed } => {
                if confirmed {
                    vec![Effect::Delete(id)]
                } else {
                    Vec::new()
                }
            }
            CompteFormAction::DeleteSucceeded(_) => {
                vec![Effect::Notify(MSG_DELETED), Effect::FetchAll]
            }
            CompteFormAction::DeleteFailed { id, reason } => {
                log::error!("Erreur lors de la suppression du compte {}: {}", id, reason);
                Vec::new()
            }
            CompteFormAction::FetchSucceeded(comptes) => {
                self.comptes = comptes;
                Vec::new()
            }
            CompteFormAction::FetchFailed(reason) => {
                log::error!("Erreur lors de la récupération des comptes: {}", reason);
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        self.error = None;

        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            return Vec::new();
        }

        match self.editing_id {
            Some(id) => vec![Effect::Update(id, self.draft.clone())],
            None => vec![Effect::Create(Compte {
                id: None,
                ..self.draft.clone()
            })],
        }
    }

    fn apply_field(&mut self, name: &str, value: &str) {
        let Some(field) = CompteField::from_name(name) else {
            log::warn!("Unknown field '{}' ignored", name);
            return;
        };

        match field {
            CompteField::Solde => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    self.draft.solde = 0.0;
                    return;
                }
                match trimmed.parse::<f64>() {
                    Ok(v) if v.is_finite() => self.draft.solde = v,
                    _ => log::warn!("Invalid solde '{}' ignored", value),
                }
            }
            CompteField::DateCreation => self.draft.date_creation = value.to_string(),
            CompteField::Type => match CompteType::from_code(value) {
                Some(t) => self.draft.compte_type = t,
                None => log::warn!("Invalid compte type '{}' ignored", value),
            },
        }
    }

    fn reset(&mut self) {
        self.draft = Compte::default();
        self.editing_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Compte {
        Compte {
            id: Some(CompteId(1)),
            solde: 100.0,
            date_creation: "2024-01-01".to_string(),
            compte_type: CompteType::Courant,
        }
    }

    fn loaded() -> CompteFormState {
        let mut state = CompteFormState::new();
        state.reduce(CompteFormAction::FetchSucceeded(vec![sample()]));
        state
    }

    fn change(state: &mut CompteFormState, name: &str, value: &str) {
        let effects = state.reduce(CompteFormAction::FieldChanged {
            name: name.to_string(),
            value: value.to_string(),
        });
        assert!(effects.is_empty());
    }

    fn fill_valid(state: &mut CompteFormState) {
        change(state, "solde", "250.5");
        change(state, "dateCreation", "2024-05-10");
        change(state, "type", "EPARGNE");
    }

    #[test]
    fn test_mount_fetches() {
        let mut state = CompteFormState::new();
        assert_eq!(state.reduce(CompteFormAction::Mounted), vec![Effect::FetchAll]);
        assert!(!state.is_edit_mode());
        assert_eq!(state.draft, Compte::default());
    }

    #[test]
    fn test_field_changes_merge_into_draft() {
        let mut state = CompteFormState::new();
        fill_valid(&mut state);
        assert_eq!(state.draft.solde, 250.5);
        assert_eq!(state.draft.date_creation, "2024-05-10");
        assert_eq!(state.draft.compte_type, CompteType::Epargne);
    }

    #[test]
    fn test_invalid_field_values_are_ignored() {
        let mut state = CompteFormState::new();
        change(&mut state, "solde", "12");
        change(&mut state, "solde", "abc");
        change(&mut state, "solde", "NaN");
        change(&mut state, "type", "JOINT");
        change(&mut state, "owner", "x");
        assert_eq!(state.draft.solde, 12.0);
        assert_eq!(state.draft.compte_type, CompteType::Courant);

        change(&mut state, "solde", "");
        assert_eq!(state.draft.solde, 0.0);
    }

    #[test]
    fn test_negative_balance_rejected_without_request() {
        let mut state = CompteFormState::new();
        fill_valid(&mut state);
        change(&mut state, "solde", "-5");

        let effects = state.reduce(CompteFormAction::Submit);
        assert!(effects.is_empty());
        assert!(state.error.as_deref().unwrap_or_default().contains("négatif"));
    }

    #[test]
    fn test_missing_date_rejected_without_request() {
        let mut state = CompteFormState::new();
        change(&mut state, "solde", "10");

        let effects = state.reduce(CompteFormAction::Submit);
        assert!(effects.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("La date de création est obligatoire.")
        );
    }

    #[test]
    fn test_balance_error_shown_before_date_error() {
        let mut state = CompteFormState::new();
        change(&mut state, "solde", "-1");
        state.reduce(CompteFormAction::Submit);
        assert_eq!(
            state.error.as_deref(),
            Some("Le solde ne peut pas être négatif.")
        );
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut state = CompteFormState::new();
        state.reduce(CompteFormAction::Submit);
        assert!(state.error.is_some());

        fill_valid(&mut state);
        state.reduce(CompteFormAction::Submit);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_create_flow() {
        let mut state = CompteFormState::new();
        fill_valid(&mut state);

        let effects = state.reduce(CompteFormAction::Submit);
        assert_eq!(
            effects,
            vec![Effect::Create(Compte {
                id: None,
                solde: 250.5,
                date_creation: "2024-05-10".to_string(),
                compte_type: CompteType::Epargne,
            })]
        );

        let effects = state.reduce(CompteFormAction::SubmitSucceeded(SubmitMode::Create));
        assert_eq!(effects, vec![Effect::Notify(MSG_ADDED), Effect::FetchAll]);
        assert_eq!(state.editing_id, None);
        assert_eq!(state.draft, Compte::default());
    }

    #[test]
    fn test_update_flow() {
        let mut state = loaded();
        state.reduce(CompteFormAction::Edit(CompteId(1)));
        change(&mut state, "solde", "175");

        let effects = state.reduce(CompteFormAction::Submit);
        let expected = Compte {
            solde: 175.0,
            ..sample()
        };
        assert_eq!(effects, vec![Effect::Update(CompteId(1), expected)]);

        let effects = state.reduce(CompteFormAction::SubmitSucceeded(SubmitMode::Update(
            CompteId(1),
        )));
        assert_eq!(effects, vec![Effect::Notify(MSG_UPDATED), Effect::FetchAll]);
        assert_eq!(state.editing_id, None);
        assert!(!state.is_edit_mode());
        assert_eq!(state.draft, Compte::default());
    }

    #[test]
    fn test_failed_submit_keeps_draft_and_edit_target() {
        let mut state = loaded();
        state.reduce(CompteFormAction::Edit(CompteId(1)));
        let draft = state.draft.clone();

        let effects = state.reduce(CompteFormAction::SubmitFailed {
            mode: SubmitMode::Update(CompteId(1)),
            reason: "Server responded with status 500".to_string(),
        });
        assert!(effects.is_empty());
        assert_eq!(state.error.as_deref(), Some(MSG_SUBMIT_FAILED));
        assert_eq!(state.draft, draft);
        assert_eq!(state.editing_id, Some(CompteId(1)));

        // retry issues the same update
        assert_eq!(
            state.reduce(CompteFormAction::Submit),
            vec![Effect::Update(CompteId(1), draft)]
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_fetch_replaces_list() {
        let mut state = loaded();
        assert_eq!(state.comptes, vec![sample()]);

        let other = Compte {
            id: Some(CompteId(2)),
            solde: 5.0,
            date_creation: "2024-02-02".to_string(),
            compte_type: CompteType::Epargne,
        };
        state.reduce(CompteFormAction::FetchSucceeded(vec![other.clone()]));
        assert_eq!(state.comptes, vec![other]);
    }

    #[test]
    fn test_fetch_failure_keeps_list_and_error() {
        let mut state = loaded();
        let effects = state.reduce(CompteFormAction::FetchFailed("offline".to_string()));
        assert!(effects.is_empty());
        assert_eq!(state.comptes, vec![sample()]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_edit_copies_record() {
        let mut state = loaded();
        let effects = state.reduce(CompteFormAction::Edit(CompteId(1)));
        assert!(effects.is_empty());
        assert_eq!(state.draft, sample());
        assert_eq!(state.editing_id, Some(CompteId(1)));
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut state = loaded();
        change(&mut state, "solde", "3");
        let before = state.clone();

        state.reduce(CompteFormAction::Edit(CompteId(99)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_confirmed() {
        let mut state = loaded();
        assert_eq!(
            state.reduce(CompteFormAction::DeleteRequested(CompteId(1))),
            vec![Effect::ConfirmDelete(CompteId(1))]
        );
        assert_eq!(
            state.reduce(CompteFormAction::DeleteAnswered {
                id: CompteId(1),
                confirmed: true,
            }),
            vec![Effect::Delete(CompteId(1))]
        );
        assert_eq!(
            state.reduce(CompteFormAction::DeleteSucceeded(CompteId(1))),
            vec![Effect::Notify(MSG_DELETED), Effect::FetchAll]
        );
    }

    #[test]
    fn test_delete_declined_sends_nothing() {
        let mut state = loaded();
        state.reduce(CompteFormAction::DeleteRequested(CompteId(1)));
        let before = state.clone();

        let effects = state.reduce(CompteFormAction::DeleteAnswered {
            id: CompteId(1),
            confirmed: false,
        });
        assert!(effects.is_empty());
        assert_eq!(state, before);
        assert_eq!(state.comptes, vec![sample()]);
    }

    #[test]
    fn test_selected_type_follows_draft() {
        let mut state = loaded();
        state.reduce(CompteFormAction::FetchSucceeded(vec![Compte {
            compte_type: CompteType::Epargne,
            ..sample()
        }]));
        change(&mut state, "type", "EPARGNE");
        change(&mut state, "type", "COURANT");
        assert_eq!(state.selected_type_code(), "COURANT");

        state.reduce(CompteFormAction::Edit(CompteId(1)));
        assert_eq!(state.selected_type_code(), "EPARGNE");

        state.reduce(CompteFormAction::Cancel);
        assert_eq!(state.selected_type_code(), "COURANT");
    }

    #[test]
    fn test_delete_failure_is_silent() {
        let mut state = loaded();
        let effects = state.reduce(CompteFormAction::DeleteFailed {
            id: CompteId(1),
            reason: "HTTP 500".to_string(),
        });
        assert!(effects.is_empty());
        assert_eq!(state.error, None);
        assert_eq!(state.comptes, vec![sample()]);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut state = loaded();
        state.reduce(CompteFormAction::Edit(CompteId(1)));

        assert!(state.reduce(CompteFormAction::Cancel).is_empty());
        let once = state.clone();
        state.reduce(CompteFormAction::Cancel);
        assert_eq!(state, once);
        assert_eq!(state.draft, Compte::default());
        assert_eq!(state.editing_id, None);
    }

    #[test]
    fn test_field_names_roundtrip() {
        for f in [CompteField::Solde, CompteField::DateCreation, CompteField::Type] {
            assert_eq!(CompteField::from_name(f.name()), Some(f));
        }
    }
}
