//! u001 Document Q&A (MVVM)
//!
//! Structure:
//! - api.rs: HTTP calls to `/api/*`
//! - state.rs: QaState, all page state and its transitions, no browser types
//! - view_model.rs: DocumentQaVm, signals + async handlers
//! - view.rs: DocumentQaPage and the ask panel
//! - upload_panel.rs: file selection, upload result, text preview

pub mod api;
pub mod state;
mod upload_panel;
mod view;
mod view_model;

pub use view::DocumentQaPage;
pub use view_model::DocumentQaVm;
