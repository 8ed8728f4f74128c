//! Built-in cards and card blocks.
//!
//! The generic [`Card`] container plus the health-tracking card variants:
//! contact cards, task cards, and the checklist card. All of them render
//! through the same chrome, so swapping content never changes the surface.

pub mod buttons;
pub mod card;
pub mod checklist;
pub mod contact;
pub mod header;
pub mod instructions;
pub mod rule;
pub mod task;

pub use buttons::{Action, AddressButton, CheckmarkButton, ContactButton};
pub use card::Card;
pub use checklist::ChecklistTaskCard;
pub use contact::{ContactButtonRow, ContactFooter, DetailedContactCard, SimpleContactCard};
pub use header::CardHeader;
pub use instructions::Instructions;
pub use rule::Rule;
pub use task::{GridTaskCard, SimpleTaskCard};
