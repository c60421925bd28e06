//! Decision engine for the sweeper cleaning agent: incremental map building
//! from local sensing, shortest-safe-path routing over known terrain, and
//! utility-scored exploration.

#![forbid(unsafe_code)]

pub mod agent;
pub mod heading;
pub mod memory;
pub mod router;
pub mod utility;

pub use agent::SweeperAgent;
pub use heading::{Heading, RelativeHeading};
pub use memory::{CellKnowledge, Memory};
pub use router::route_to;
pub use utility::{ACTIVATION_THRESHOLD, BLOCKED_UTILITY};
