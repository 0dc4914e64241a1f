//! Per-action handlers. Arity has already been checked by the dispatcher.

pub(super) mod features;
pub(super) mod fish_path;
pub(super) mod session;
pub(super) mod source;
