#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn add_trigger() -> Weight;
  fn set_trigger() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  /// Storage: `ConditionTrigger::NextTriggerId` (r:1 w:1)
  /// Storage: `ConditionTrigger::Triggers` (r:0 w:1)
  fn add_trigger() -> Weight {
    Weight::from_parts(17_000_000, 1600)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  /// Storage: `ConditionTrigger::Triggers` (r:1 w:1)
  fn set_trigger() -> Weight {
    Weight::from_parts(15_000_000, 1900)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn add_trigger() -> Weight {
    Weight::from_parts(17_000_000, 1600)
      .saturating_add(RocksDbWeight::get().reads_writes(1, 2))
  }
  fn set_trigger() -> Weight {
    Weight::from_parts(15_000_000, 1900)
      .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
  }
}
