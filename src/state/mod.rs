//! State Module - Runtime state management systems
//!
//! The platform services the component relies on:
//!
//! - **Focus** - Focused component, focus/blur callbacks, keyboard dismissal
//! - **Keyboard** - Event types, dispatch, handler registry
//! - **Press** - Tap dispatch and hit rectangles for the code row
//! - **Interactions** - Settle-point scheduling for deferred completion work

pub mod focus;
pub mod keyboard;
pub mod press;
pub mod interactions;
