pub mod initialize_emission;
pub mod deposit_tokens;
pub mod distribute;
pub mod set_authority;
pub mod read_counters;
pub mod emit_emission_quote;

pub use initialize_emission::*;
pub use deposit_tokens::*;
pub use distribute::*;
pub use set_authority::*;
pub use read_counters::*;
pub use emit_emission_quote::*;
