pub mod curve_config;
pub mod mint_authority_pda;
pub mod pool;

pub use curve_config::*;
pub use mint_authority_pda::*;
pub use pool::*;
