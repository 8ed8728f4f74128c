//! Widget system: the CardBlock trait and style scoping.

pub mod scope;
pub mod traits;

pub use scope::StyleScope;
pub use traits::{BlockExt, CardBlock};
