//! Reversible primitives built on a single trail of (cell, previous value)
//! pairs: integer cells, a one-shot switch, and a compact reversible set.
mod trailed_change;
mod trailed_integer;
mod trailed_switch;
mod trailed_values;
mod unordered_rev_set;

pub(crate) use trailed_change::TrailedChange;
pub use trailed_integer::TrailedInteger;
pub use trailed_switch::TrailedSwitch;
pub use trailed_values::TrailedValues;
pub use unordered_rev_set::UnorderedRevSet;
