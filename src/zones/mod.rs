//! Where tiles live: the chain, the two hands, and the stock.
//!
//! ## Key Types
//!
//! - `Chain`: Played tiles with two exposed endpoints
//! - `Hand`: One side's private tiles
//! - `Stock`: The shuffled face-down reserve

pub mod chain;
pub mod hand;
pub mod stock;

pub use chain::{Attach, Chain};
pub use hand::Hand;
pub use stock::Stock;
