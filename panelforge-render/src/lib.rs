//! HTML rendering for settings panels
//!
//! Pure, synchronous markup generation over a pre-resolved snapshot: the
//! caller (normally the `panelforge` facade) loads persisted values and
//! resolves choice sources first, then rendering is a single pass with no
//! I/O and no failure path. Malformed fields degrade — a field without an
//! id or with an unsupported kind renders its label row and no control,
//! with a `tracing` warning.
//!
//! Markup is built with [maud], so every interpolated title, value, and
//! label is HTML-escaped. The inline style/script assets for the two
//! interactive controls (sortable gallery, image-select grid) are emitted
//! as raw blocks; field ids flow into them verbatim and must be plain
//! identifiers (the file store enforces the same shape on persistence).

pub mod assets;
pub mod page;
pub mod renderer;

pub use page::{nav_tabs, render_page, render_sections};
pub use renderer::{FieldContext, Renderer};
