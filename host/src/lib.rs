//! Embedded host for the kanban board widget.
//!
//! Serves the compiled widget bundle (or redirects to its dev server),
//! answers the page's invoke calls, and pushes change events over SSE.

pub mod component;
pub mod protocol;
pub mod session;
pub mod web;
