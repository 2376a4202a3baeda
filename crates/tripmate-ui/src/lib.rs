//! Tripmate UI Components
//!
//! Form building blocks shared by the Tripmate pages: buttons, labelled
//! inputs and selects with inline error annotations, selectable pills and
//! removable tag chips.
//!
//! ## Error annotations
//!
//! Every field component takes an optional `error`. When set, the control
//! gets the `has-error` class (red border) and the message is rendered
//! directly beneath it as a `.error-message` element. Passing `None` clears
//! both, so re-rendering from a fresh validation report never leaves stale
//! annotations behind.

pub mod components;

pub use components::*;
