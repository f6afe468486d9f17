use crate as pallet_aurum_token;
use crate::{PriceFeed, PriceSample};
use core::cell::RefCell;
use core::time::Duration;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU64, UnixTime},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

/// One whole token in 18-decimal base units.
pub const UNIT: u128 = 1_000_000_000_000_000_000;
/// Issuance ceiling wired into the test runtime.
pub const MAX_SUPPLY: u128 = 10_000_000 * UNIT;
/// Amount credited to the deployer at genesis.
pub const GENESIS_MINT: u128 = 2_000_000 * UNIT;
/// Deployer account; holds Owner and Pauser from genesis.
pub const OWNER: u64 = 1;

/// Wall-clock origin of every test, in unix seconds.
pub const GENESIS_TIME: u64 = 1_700_000_000;
/// Default feed sample: 1940 units at 8 feed decimals.
pub const FEED_VALUE: i128 = 194_000_000_000;
/// `FEED_VALUE` rescaled to the ledger's 18-decimal fixed point.
pub const GENESIS_PRICE: u128 = 1_940 * UNIT;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test
    {
        System: frame_system,
        AurumToken: pallet_aurum_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
}

thread_local! {
    static FEED_SAMPLE: RefCell<Option<PriceSample>> =
        RefCell::new(Some(PriceSample { value: FEED_VALUE, published_at: GENESIS_TIME }));
    static FEED_DECIMALS: RefCell<u8> = RefCell::new(8);
    static NOW_SECS: RefCell<u64> = RefCell::new(GENESIS_TIME);
}

/// Feed backed by thread-local state so each test can script it.
pub struct MockFeed;

impl PriceFeed for MockFeed {
    fn decimals() -> u8 {
        FEED_DECIMALS.with(|decimals| *decimals.borrow())
    }

    fn latest_sample() -> Option<PriceSample> {
        FEED_SAMPLE.with(|sample| *sample.borrow())
    }
}

/// Replace the feed's next answer; `None` simulates an unreachable feed.
pub fn set_feed_sample(sample: Option<PriceSample>) {
    FEED_SAMPLE.with(|cell| *cell.borrow_mut() = sample);
}

/// Change the feed's advertised fixed-point scale.
pub fn set_feed_decimals(decimals: u8) {
    FEED_DECIMALS.with(|cell| *cell.borrow_mut() = decimals);
}

/// Thread-local unix clock, advanced explicitly by tests.
pub struct MockClock;

impl UnixTime for MockClock {
    fn now() -> Duration {
        Duration::from_secs(NOW_SECS.with(|now| *now.borrow()))
    }
}

/// Move the mock wall clock to an absolute unix time.
pub fn set_now(secs: u64) {
    NOW_SECS.with(|cell| *cell.borrow_mut() = secs);
}

/// Reset the scripted collaborators; called by every externalities builder
/// so tests cannot leak state into each other on the same thread.
fn reset_collaborators() {
    set_feed_sample(Some(PriceSample { value: FEED_VALUE, published_at: GENESIS_TIME }));
    set_feed_decimals(8);
    set_now(GENESIS_TIME);
}

parameter_types! {
    pub const MaxSupply: u128 = MAX_SUPPLY;
    pub const PriceUpdateInterval: u64 = 86_400;
}

impl pallet_aurum_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type TimeProvider = MockClock;
    type PriceFeed = MockFeed;
    type MaxSupply = MaxSupply;
    type CooldownPeriod = ConstU64<1>;
    type PriceUpdateInterval = PriceUpdateInterval;
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    reset_collaborators();
    let mut t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();

    pallet_aurum_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"Aurum Token".to_vec(),
        token_symbol: b"AUR".to_vec(),
        initial_balances: vec![(OWNER, GENESIS_MINT)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}

/// Externalities built while the feed is unreachable, for exercising the
/// fail-open genesis sync.
pub fn new_test_ext_without_feed() -> sp_io::TestExternalities {
    reset_collaborators();
    set_feed_sample(None);
    let mut t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();

    pallet_aurum_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"Aurum Token".to_vec(),
        token_symbol: b"AUR".to_vec(),
        initial_balances: vec![(OWNER, GENESIS_MINT)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}
