//! Engine - Component registry and parallel arrays.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, parent context
//! - Arrays: Parallel reactive arrays for component state
//!
//! # Architecture
//!
//! Components are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Row     (parent=None, visible=true)
//! Index 1: CodeBox (parent=0,    display="1", caret=false)
//! Index 2: CodeBox (parent=0,    display="",  caret=true)
//! Index 3: Entry   (parent=0,    visible=false, focusable=true)
//! ```
//!
//! Each cell is a stable reactive slot, so display and caret values bound
//! to getters over the code signal update without any explicit re-render.

mod registry;
pub mod arrays;

pub use registry::*;
