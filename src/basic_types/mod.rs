mod propagation_status;
mod trail;

pub use propagation_status::Inconsistency;
pub use propagation_status::PropagationStatus;
pub use trail::Trail;
