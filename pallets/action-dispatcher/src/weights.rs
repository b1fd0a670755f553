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
  fn create_action() -> Weight;
  fn set_allowed_caller() -> Weight;
  fn execute(payload_len: u32) -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  fn create_action() -> Weight {
    Weight::from_parts(14_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn set_allowed_caller() -> Weight {
    Weight::from_parts(12_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  /// Action lookup plus the recorded payload copy; disbursement weight is added separately.
  fn execute(payload_len: u32) -> Weight {
    Weight::from_parts(
      10_000_000u64.saturating_add(u64::from(payload_len).saturating_mul(1_200)),
      1500u64.saturating_add(u64::from(payload_len)),
    )
    .saturating_add(T::DbWeight::get().reads(1))
    .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn create_action() -> Weight { Weight::from_parts(14_000_000, 1500) }
  fn set_allowed_caller() -> Weight { Weight::from_parts(12_000_000, 1500) }
  fn execute(payload_len: u32) -> Weight {
    Weight::from_parts(10_000_000u64.saturating_add(u64::from(payload_len).saturating_mul(1_200)), 1500)
      .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
  }
}
