//! Cornice Animation System
//!
//! Easing curves and the cross-fade transition used for button hover and
//! window activation changes.
//!
//! # Features
//!
//! - **Easing**: quadratic/cubic curves, ease-in-out by default
//! - **Transitions**: value-semantics progress state advanced by an
//!   external tick source, reversible mid-flight without a jump

pub mod easing;
pub mod transition;

pub use easing::Easing;
pub use transition::{Direction, Transition};
