#![cfg_attr(not(feature = "std"), no_std)]

pub mod disbursement;
pub mod ecosystem;
pub mod trigger;

pub use disbursement::*;
pub use ecosystem::*;
pub use trigger::*;
