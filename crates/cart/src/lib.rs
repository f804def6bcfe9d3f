pub mod aggregation;
mod command;
mod query;
pub mod report;
mod snapshot;

pub use aggregation::{AggregatedLine, CartAggregator, ShoppingList};
pub use command::*;
pub use query::*;
pub use snapshot::CartSnapshot;
