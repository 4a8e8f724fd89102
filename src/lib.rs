//! # Nots Architecture
//!
//! Nots is a **UI-agnostic note-taking core**. It holds the data model and
//! the mutation rules for notes; it knows nothing about widgets, styling,
//! terminals, or HTML. Any presentation layer (desktop, web, TUI) drives it
//! through the same narrow interface and re-renders from its state.
//!
//! ## The Two-Layer Picture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Presentation Layer (external, not in this crate)          │
//! │  - Renders notes, collects input, triggers re-render       │
//! │  - The ONLY place that knows about widgets or markup       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Core (this crate)                                         │
//! │  - store: NoteStore, the single ownership root             │
//! │  - model: Note aggregate and its mutation rules            │
//! │  - text: direction detection + link spans for rendering    │
//! │  - error: recoverable, user-displayable failures           │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in the Core
//!
//! Core code takes regular Rust arguments and returns regular Rust types
//! (`Result<T, NotsError>`). It never writes to stdout/stderr, never emits
//! markup, and never assumes a rendering environment. [`text::extract_links`]
//! returns byte-offset spans, not anchor tags, for exactly this reason.
//!
//! ## Interaction Model
//!
//! Single-threaded request/response: the presentation layer reads the store,
//! displays it, translates one user action into one mutation call, and
//! re-renders. Every operation completes immediately (in-memory only), and
//! every failure is a recoverable condition to show the user.

pub mod error;
pub mod model;
pub mod store;
pub mod text;

pub use error::{NotsError, Result};
pub use model::{ListItem, ListKind, MediaBlob, MediaFormat, Note};
pub use store::NoteStore;
pub use text::{detect_direction, extract_links, Direction, LinkSpan};
