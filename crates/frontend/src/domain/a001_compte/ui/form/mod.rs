//! Compte form UI module
//!
//! - state.rs: explicit form state and the pure reducer producing effects
//! - view_model.rs: holds the state in a signal, executes effects (HTTP, dialogs)
//! - view.rs: Leptos component (pure UI)

pub mod state;
mod view;
mod view_model;

pub use view::CompteForm;
