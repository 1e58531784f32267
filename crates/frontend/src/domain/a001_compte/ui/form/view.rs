use super::state::{CompteField, CompteFormAction};
use super::view_model::CompteFormViewModel;
use contracts::domain::a001_compte::{Compte, CompteType};
use leptos::prelude::*;

#[component]
pub fn CompteForm() -> impl IntoView {
    let vm = CompteFormViewModel::new();
    vm.dispatch(CompteFormAction::Mounted);

    let field_changed = move |field: CompteField, value: String| {
        vm.dispatch(CompteFormAction::FieldChanged {
            name: field.name().to_string(),
            value,
        });
    };

    view! {
        <div class="details-container compte-form">
            <div class="details-header">
                <h2>
                    {move || if vm.is_edit_mode() { "Modifier un Compte" } else { "Ajouter un Compte" }}
                </h2>
            </div>

            {move || vm.state.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.dispatch(CompteFormAction::Submit);
                }
            >
                <div class="form-group">
                    <label for="solde">{"Solde"}</label>
                    // committed on change so partial input like "-" is not overwritten while typing
                    <input
                        type="number"
                        id="solde"
                        name=CompteField::Solde.name()
                        required=true
                        prop:value=move || vm.state.with(|s| s.draft.solde.to_string())
                        on:change=move |ev| field_changed(CompteField::Solde, event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="dateCreation">{"Date de Création"}</label>
                    <input
                        type="date"
                        id="dateCreation"
                        name=CompteField::DateCreation.name()
                        required=true
                        prop:value=move || vm.state.with(|s| s.draft.date_creation.clone())
                        on:input=move |ev| field_changed(CompteField::DateCreation, event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="type">{"Type"}</label>
                    <select
                        id="type"
                        name=CompteField::Type.name()
                        required=true
                        prop:value=move || vm.state.with(|s| s.selected_type_code())
                        on:change=move |ev| field_changed(CompteField::Type, event_target_value(&ev))
                    >
                        {CompteType::all().into_iter().map(|t| {
                            let is_selected = move || vm.state.with(|s| s.draft.compte_type == t);
                            view! {
                                <option value=t.code() selected=is_selected>
                                    {t.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary">
                        {move || if vm.is_edit_mode() { "Modifier" } else { "Ajouter" }}
                    </button>
                    <Show when=move || vm.is_edit_mode()>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| vm.dispatch(CompteFormAction::Cancel)
                        >
                            {"Annuler"}
                        </button>
                    </Show>
                </div>
            </form>

            <h2>{"Liste des Comptes"}</h2>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"ID"}</th>
                            <th class="table__header-cell">{"Solde"}</th>
                            <th class="table__header-cell">{"Date de Création"}</th>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || vm.state.with(|s| s.comptes.clone()).into_iter().map(|c| compte_row(vm, c)).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn compte_row(vm: CompteFormViewModel, c: Compte) -> impl IntoView {
    let actions = c.id.map(|id| {
        view! {
            <button
                class="btn btn-primary"
                on:click=move |_| vm.dispatch(CompteFormAction::Edit(id))
            >
                {"Modifier"}
            </button>
            <button
                class="btn btn-primary"
                on:click=move |_| vm.dispatch(CompteFormAction::DeleteRequested(id))
            >
                {"Supprimer"}
            </button>
        }
    });

    view! {
        <tr class="table__row">
            <td class="table__cell">{c.id.map(|id| id.to_string()).unwrap_or_default()}</td>
            <td class="table__cell">{c.solde.to_string()}</td>
            <td class="table__cell">{c.date_creation}</td>
            <td class="table__cell">{c.compte_type.code()}</td>
            <td class="table__cell">{actions}</td>
        </tr>
    }
}
