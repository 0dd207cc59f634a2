//! Finalization of bisector edges against a rectangular window.
//!
//! For every edge the pass runs three steps:
//! 1. bound: place missing endpoints where the bisector crosses the window,
//! 2. clip: Liang–Barsky clip of the now bounded segment,
//! 3. prune: drop edges that collapsed to (almost) a point.
//!
//! Any edge failing a step is tombstoned.

mod connect;
mod liang_barsky;
mod pass;
mod window;

pub use pass::ClipReport;
pub use window::ClipWindow;

pub(crate) use pass::clip_pass;
