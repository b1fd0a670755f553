extern crate alloc;

use crate as pallet_trigger_registry;
use alloc::vec::Vec;
use polkadot_sdk::frame_support::traits::fungibles::Inspect;
use polkadot_sdk::frame_support::{
  BoundedVec, PalletId, assert_ok, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  ActionId,
  ecosystem::params::{MAX_LABEL_LENGTH, MAX_PAYLOAD_LENGTH, MAX_RECIPIENTS},
};

/// Owns the actions and funds disbursements
pub const FUNDER: u64 = 1;
pub const STRANGER: u64 = 3;

pub const TOKEN: u32 = 1;
pub const TOKEN_SUPPLY: u128 = 100_000;

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    Disburser: pallet_disburser,
    ActionDispatcher: pallet_action_dispatcher,
    TriggerRegistry: pallet_trigger_registry,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

pub struct DisburserPalletId;
impl Get<PalletId> for DisburserPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::ecosystem::pallet_ids::DISBURSER_PALLET_ID)
  }
}

impl pallet_disburser::Config for Test {
  type Assets = Assets;
  type PalletId = DisburserPalletId;
  type MaxRecipients = ConstU32<MAX_RECIPIENTS>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = DisburserBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct DisburserBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_disburser::BenchmarkHelper<u64> for DisburserBenchmarkHelper {
  fn setup_approved_payer(
    payer: &u64,
    delegate: &u64,
    amount: u128,
  ) -> Result<u32, polkadot_sdk::sp_runtime::DispatchError> {
    use polkadot_sdk::frame_support::traits::{Currency, fungibles::Mutate};
    let _ = Balances::deposit_creating(payer, 1_000_000);
    Assets::mint_into(TOKEN, payer, amount)?;
    Assets::approve_transfer(RuntimeOrigin::signed(*payer), TOKEN, *delegate, amount)?;
    Ok(TOKEN)
  }
}

impl pallet_action_dispatcher::Config for Test {
  type Disburser = Disburser;
  type MaxPayloadLength = ConstU32<MAX_PAYLOAD_LENGTH>;
  type WeightInfo = ();
}

pub struct RegistryPalletId;
impl Get<PalletId> for RegistryPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::ecosystem::pallet_ids::TRIGGER_REGISTRY_PALLET_ID)
  }
}

impl pallet_trigger_registry::Config for Test {
  type ManagerOrigin = frame_system::EnsureRoot<u64>;
  type Actions = ActionDispatcher;
  type PalletId = RegistryPalletId;
  type MaxLabelLength = ConstU32<MAX_LABEL_LENGTH>;
  type MaxPayloadLength = ConstU32<MAX_PAYLOAD_LENGTH>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = TriggerRegistryBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct TriggerRegistryBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64> for TriggerRegistryBenchmarkHelper {
  fn setup_action(invoker: &u64) -> Result<ActionId, polkadot_sdk::sp_runtime::DispatchError> {
    create_action(pallet_action_dispatcher::ActionKind::Record, Some(*invoker))
  }
}

pub fn create_action(
  kind: pallet_action_dispatcher::ActionKind,
  allowed_caller: Option<u64>,
) -> Result<ActionId, polkadot_sdk::sp_runtime::DispatchError> {
  let action_id = ActionDispatcher::next_action_id();
  ActionDispatcher::create_action(RuntimeOrigin::signed(FUNDER), kind, allowed_caller)?;
  Ok(action_id)
}

pub fn label(text: &str) -> BoundedVec<u8, ConstU32<MAX_LABEL_LENGTH>> {
  text.as_bytes().to_vec().try_into().expect("test labels fit MaxLabelLength")
}

pub fn payload(bytes: &[u8]) -> BoundedVec<u8, ConstU32<MAX_PAYLOAD_LENGTH>> {
  bytes.to_vec().try_into().expect("test payloads fit MaxPayloadLength")
}

/// Trigger metadata as registered by an anticipatory-action plan.
pub fn flood_trigger(action: ActionId) -> crate::TriggerParamsOf<Test> {
  crate::TriggerParams {
    trigger_type: label("FLOOD"),
    phase: label("READINESS"),
    title: label("Flood readiness trigger"),
    source: label("Glofas"),
    river_basin: label("Karnali"),
    params_hash: [7u8; 32],
    is_mandatory: true,
    action,
  }
}

/// Approve the disburser account to pull `amount` of TOKEN from the funder.
pub fn approve(amount: u128) {
  assert_ok!(Assets::approve_transfer(
    RuntimeOrigin::signed(FUNDER),
    TOKEN,
    Disburser::account_id(),
    amount
  ));
}

pub fn token_balance(who: u64) -> u128 {
  <Assets as Inspect<u64>>::balance(TOKEN, &who)
}

pub fn beneficiaries(count: u64) -> Vec<u64> {
  (1000..1000 + count).collect()
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: alloc::vec![(FUNDER, 1_000_000)],
    ..Default::default()
  }
  .assimilate_storage(&mut t)
  .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: alloc::vec![(TOKEN, FUNDER, true, 1)],
    metadata: alloc::vec![],
    accounts: alloc::vec![(TOKEN, FUNDER, TOKEN_SUPPLY)],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_disburser::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
