//! Mutable widget state: the checklist collection.

pub mod checklist;

pub use checklist::{ChecklistItem, ChecklistState, SubscriptionId};
