//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, task
//! cancellation) and display rules from page and component logic.

pub mod cancel;
pub mod fallback;
pub mod ticker;
