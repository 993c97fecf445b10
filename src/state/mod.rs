//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`router`, `ui`, `form`) so individual
//! components can depend on small focused models. Everything here is plain
//! data held in `RwSignal`s provided via context; no module touches the DOM,
//! which keeps these models unit-testable on the native target.

pub mod form;
pub mod router;
pub mod ui;
