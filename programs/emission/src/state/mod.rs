pub mod emission_state;
pub mod tier;

pub use emission_state::*;
pub use tier::*;
