//! Posting helpers that translate boolean model expressions into implication
//! edges on the atom graph.

mod boolean;

pub use boolean::post_equal;
pub use boolean::post_less_equal;
pub use boolean::post_not_equal;
pub use boolean::BoolExpression;
