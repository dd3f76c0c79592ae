#![allow(ambiguous_glob_reexports)]

pub mod claim_unclaimed;
pub mod close_split_config;
pub mod create_split_config;
pub mod execute_split;
pub mod update_split_config;

pub use claim_unclaimed::*;
pub use close_split_config::*;
pub use create_split_config::*;
pub use execute_split::*;
pub use update_split_config::*;
