//! UI state machines and view projections.
//!
//! # Responsibility
//! - Model the creation panel, card grid and detail views as plain state,
//!   leaving rendering to the embedding shell.
//!
//! # Invariants
//! - Nothing in this layer talks to storage directly; all mutations go
//!   through [`crate::collection::NoteCollection`].

pub mod app;
pub mod card;
pub mod panel;

pub use app::App;
pub use card::{relative_time, CardDetail, CardPreview};
pub use panel::{CreationPanel, PanelEvent, PanelState};
