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
  fn register_trigger() -> Weight;
  fn update_trigger() -> Weight;
  fn set_triggered(payload_len: u32) -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  fn register_trigger() -> Weight {
    Weight::from_parts(18_000_000, 1800)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn update_trigger() -> Weight {
    Weight::from_parts(14_000_000, 1800)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  /// Flag write and event only; the action's own weight is added at dispatch.
  fn set_triggered(payload_len: u32) -> Weight {
    Weight::from_parts(
      16_000_000u64.saturating_add(u64::from(payload_len).saturating_mul(1_200)),
      1800u64.saturating_add(u64::from(payload_len)),
    )
    .saturating_add(T::DbWeight::get().reads(1))
    .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn register_trigger() -> Weight { Weight::from_parts(18_000_000, 1800) }
  fn update_trigger() -> Weight { Weight::from_parts(14_000_000, 1800) }
  fn set_triggered(payload_len: u32) -> Weight {
    Weight::from_parts(16_000_000u64.saturating_add(u64::from(payload_len).saturating_mul(1_200)), 1800)
      .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
  }
}
