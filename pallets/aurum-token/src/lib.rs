#![cfg_attr(not(feature = "std"), no_std)]
// Constant extrinsic weights until generated benchmarks replace them
#![allow(deprecated)]

use codec::DecodeWithMemTracking;
use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, traits::UnixTime,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::Saturating;
use sp_std::prelude::*;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Fixed-point precision of ledger balances and of the stored reference price.
pub const DECIMALS: u8 = 18;

/// One raw observation from the external reference-price feed.
///
/// `value` is signed because feeds quote signed integers; the sync path
/// rejects anything non-positive before it touches ledger state.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct PriceSample {
    /// Quoted value, scaled by the feed's own `decimals()`.
    pub value: i128,
    /// Feed-side publication time (unix seconds).
    pub published_at: u64,
}

/// External price-feed collaborator.
///
/// Implemented by the runtime against whatever feed it trusts; the pallet
/// only ever reads through this trait and treats every call as fallible.
pub trait PriceFeed {
    /// Fixed-point scale of `latest_sample().value`.
    fn decimals() -> u8;

    /// Most recent sample, or `None` when the feed cannot be read.
    fn latest_sample() -> Option<PriceSample>;
}

/// Aggregate view over token metadata and price state, mirroring the
/// on-chain info query.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct TokenInfo {
    pub name: Vec<u8>,
    pub symbol: Vec<u8>,
    pub total_supply: u128,
    pub current_price: u128,
    pub last_price_update: u64,
}

/// Named capabilities. Membership is tracked per account in [`Roles`];
/// `Owner` administers the registry itself.
#[derive(
    Clone,
    Copy,
    Decode,
    DecodeWithMemTracking,
    Encode,
    Eq,
    MaxEncodedLen,
    PartialEq,
    RuntimeDebug,
    TypeInfo,
)]
pub enum Role {
    Owner,
    Minter,
    Bridge,
    Pauser,
}

/// Privileged entry points and the single role each one requires.
///
/// Kept as one table so call sites cannot drift apart in what they
/// demand from the caller.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum PrivilegedOp {
    Mint,
    BridgeMint,
    BridgeBurn,
    Pause,
    Unpause,
    SetBlacklist,
    UpdateMetadata,
    SetPrice,
    GrantRole,
    RevokeRole,
}

impl PrivilegedOp {
    pub fn required_role(self) -> Role {
        match self {
            PrivilegedOp::Mint => Role::Minter,
            PrivilegedOp::BridgeMint | PrivilegedOp::BridgeBurn => Role::Bridge,
            PrivilegedOp::Pause | PrivilegedOp::Unpause => Role::Pauser,
            PrivilegedOp::SetBlacklist
            | PrivilegedOp::UpdateMetadata
            | PrivilegedOp::SetPrice
            | PrivilegedOp::GrantRole
            | PrivilegedOp::RevokeRole => Role::Owner,
        }
    }
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Wall-clock source for price staleness accounting.
        type TimeProvider: UnixTime;

        /// External reference-price feed.
        type PriceFeed: PriceFeed;

        /// Hard ceiling on [`TotalIssued`], in 18-decimal base units.
        #[pallet::constant]
        type MaxSupply: Get<u128>;

        /// Blocks an account must wait after a guarded transfer before it
        /// may initiate (or be minted) the next one.
        #[pallet::constant]
        type CooldownPeriod: Get<BlockNumberFor<Self>>;

        /// Seconds that must elapse after any price update before a manual
        /// override is accepted.
        #[pallet::constant]
        type PriceUpdateInterval: Get<u64>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token display name (e.g., "Aurum Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "AUR")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Sum of every balance on the ledger. Never exceeds `MaxSupply`.
    #[pallet::storage]
    #[pallet::getter(fn total_issued)]
    pub type TotalIssued<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spend allowances: (owner, spender) -> remaining amount
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Role membership: (role, account) -> held
    #[pallet::storage]
    #[pallet::getter(fn has_role)]
    pub type Roles<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        Role,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    /// Accounts excluded from transfer-class operations, on both sides
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Block at which an account last completed a guarded transfer.
    /// Absent means the account has never been throttled.
    #[pallet::storage]
    #[pallet::getter(fn last_activity)]
    pub type LastActivity<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, BlockNumberFor<T>, OptionQuery>;

    /// Global pause flag; blocks every guarded transfer/mint path when set
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Exclusive-execution token held while a guarded mutation runs
    #[pallet::storage]
    #[pallet::getter(fn entry_locked)]
    pub type EntryLock<T> = StorageValue<_, bool, ValueQuery>;

    /// Reference price in 18-decimal fixed point
    #[pallet::storage]
    #[pallet::getter(fn current_price)]
    pub type CurrentPrice<T> = StorageValue<_, u128, ValueQuery>;

    /// Unix time (seconds) of the last accepted price update
    #[pallet::storage]
    #[pallet::getter(fn last_price_update)]
    pub type LastPriceUpdate<T> = StorageValue<_, u64, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Value moved between two accounts
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Spend allowance set
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// New value issued by a minter
        Minted { to: T::AccountId, amount: u128 },
        /// Value issued or redeemed through the bridge fast lane
        BridgeTransfer { from: T::AccountId, amount: u128 },
        /// Blacklist flag changed for an account
        Blacklisted { account: T::AccountId, status: bool },
        /// All guarded paths halted
        Paused,
        /// Guarded paths resumed
        Unpaused,
        /// Role granted to an account
        RoleGranted { role: Role, account: T::AccountId },
        /// Role revoked from an account
        RoleRevoked { role: Role, account: T::AccountId },
        /// Display name/symbol replaced
        MetadataUpdated { name: Vec<u8>, symbol: Vec<u8> },
        /// Reference price replaced (feed sync or manual override)
        PriceUpdated { price: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the operation requires.
        Unauthorized,
        /// The global pause flag is set.
        SystemPaused,
        /// A party to the operation is blacklisted.
        AccountBlacklisted,
        /// The initiating account is still inside its cooldown window.
        CooldownActive,
        /// Issuance would push `TotalIssued` past `MaxSupply`.
        SupplyExceeded,
        /// Debit exceeds the account's balance or allowance.
        InsufficientBalance,
        /// A guarded operation was entered while another was in progress.
        ReentrantCall,
        /// Manual price override attempted before the update interval elapsed.
        TooSoon,
        /// The external price feed could not be read.
        OracleUnavailable,
        /// The feed returned a non-positive or unrepresentable sample.
        InvalidSample,
        /// Metadata exceeds the bounded name/symbol lengths.
        InvalidMetadata,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::ensure_not_blacklisted(&sender)?;
            Self::ensure_not_blacklisted(&to)?;
            let now = frame_system::Pallet::<T>::block_number();
            Self::ensure_cooldown_clear(&sender, now)?;

            Self::with_entry_lock(|| {
                Self::do_move(&sender, &to, amount)?;
                LastActivity::<T>::insert(&sender, now);
                Ok(())
            })?;

            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::ensure_not_blacklisted(&from)?;
            Self::ensure_not_blacklisted(&to)?;
            let now = frame_system::Pallet::<T>::block_number();
            Self::ensure_cooldown_clear(&from, now)?;

            Self::with_entry_lock(|| {
                let allowance = Allowances::<T>::get(&from, &spender);
                ensure!(allowance >= amount, Error::<T>::InsufficientBalance);
                Self::do_move(&from, &to, amount)?;
                Allowances::<T>::insert(&from, &spender, allowance - amount);
                LastActivity::<T>::insert(&from, now);
                Ok(())
            })?;

            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            Self::ensure_unpaused()?;
            Self::ensure_not_blacklisted(&to)?;
            Self::ensure_authorized(&minter, PrivilegedOp::Mint)?;
            let now = frame_system::Pallet::<T>::block_number();
            Self::ensure_cooldown_clear(&to, now)?;

            Self::with_entry_lock(|| {
                Self::do_issue(&to, amount)?;
                LastActivity::<T>::insert(&to, now);
                Ok(())
            })?;

            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Issue through the trusted bridge. Deliberately skips the pause,
        /// blacklist, and cooldown guards; only the role and the supply cap
        /// stand between the bridge and the ledger.
        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn bridge_mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let bridge = ensure_signed(origin)?;
            Self::ensure_authorized(&bridge, PrivilegedOp::BridgeMint)?;

            Self::with_entry_lock(|| Self::do_issue(&to, amount))?;

            Self::deposit_event(Event::BridgeTransfer { from: to, amount });
            Ok(())
        }

        /// Redeem through the trusted bridge; same fast lane as `bridge_mint`.
        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn bridge_burn(
            origin: OriginFor<T>,
            from: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let bridge = ensure_signed(origin)?;
            Self::ensure_authorized(&bridge, PrivilegedOp::BridgeBurn)?;

            Self::with_entry_lock(|| Self::do_redeem(&from, amount))?;

            Self::deposit_event(Event::BridgeTransfer { from, amount });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(10_000)]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authorized(&who, PrivilegedOp::Pause)?;
            Paused::<T>::put(true);
            Self::deposit_event(Event::Paused);
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(10_000)]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authorized(&who, PrivilegedOp::Unpause)?;
            Paused::<T>::put(false);
            Self::deposit_event(Event::Unpaused);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(10_000)]
        pub fn set_blacklisted(
            origin: OriginFor<T>,
            account: T::AccountId,
            status: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authorized(&who, PrivilegedOp::SetBlacklist)?;
            if status {
                Blacklist::<T>::insert(&account, true);
            } else {
                Blacklist::<T>::remove(&account);
            }
            Self::deposit_event(Event::Blacklisted { account, status });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(10_000)]
        pub fn update_metadata(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authorized(&who, PrivilegedOp::UpdateMetadata)?;
            let name: BoundedVec<u8, ConstU32<64>> =
                name.try_into().map_err(|_| Error::<T>::InvalidMetadata)?;
            let symbol: BoundedVec<u8, ConstU32<16>> =
                symbol.try_into().map_err(|_| Error::<T>::InvalidMetadata)?;
            TokenName::<T>::put(name.clone());
            TokenSymbol::<T>::put(symbol.clone());
            Self::deposit_event(Event::MetadataUpdated {
                name: name.into_inner(),
                symbol: symbol.into_inner(),
            });
            Ok(())
        }

        /// Manual price override. Rejected until `PriceUpdateInterval`
        /// seconds have passed since the last accepted update, so a stream
        /// of overrides cannot outrun the feed.
        #[pallet::call_index(10)]
        #[pallet::weight(10_000)]
        pub fn set_price(origin: OriginFor<T>, new_price: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authorized(&who, PrivilegedOp::SetPrice)?;
            let now = T::TimeProvider::now().as_secs();
            ensure!(
                now > LastPriceUpdate::<T>::get().saturating_add(T::PriceUpdateInterval::get()),
                Error::<T>::TooSoon
            );
            CurrentPrice::<T>::put(new_price);
            LastPriceUpdate::<T>::put(now);
            Self::deposit_event(Event::PriceUpdated { price: new_price });
            Ok(())
        }

        /// Pull the latest sample from the external feed and store it.
        /// Open to any signed caller: refresh scheduling is an off-chain
        /// concern, and the feed itself is the only trust anchor here.
        #[pallet::call_index(11)]
        #[pallet::weight(10_000)]
        pub fn sync_price(origin: OriginFor<T>) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_sync_price()
        }

        #[pallet::call_index(12)]
        #[pallet::weight(10_000)]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authorized(&who, PrivilegedOp::GrantRole)?;
            Roles::<T>::insert(role, &account, true);
            Self::deposit_event(Event::RoleGranted { role, account });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(10_000)]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authorized(&who, PrivilegedOp::RevokeRole)?;
            Roles::<T>::remove(role, &account);
            Self::deposit_event(Event::RoleRevoked { role, account });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Metadata, supply, and price state in one read, mirroring the
        /// public info query.
        pub fn token_info() -> TokenInfo {
            TokenInfo {
                name: TokenName::<T>::get().into_inner(),
                symbol: TokenSymbol::<T>::get().into_inner(),
                total_supply: TotalIssued::<T>::get(),
                current_price: CurrentPrice::<T>::get(),
                last_price_update: LastPriceUpdate::<T>::get(),
            }
        }

        pub fn ensure_authorized(who: &T::AccountId, op: PrivilegedOp) -> DispatchResult {
            ensure!(Roles::<T>::get(op.required_role(), who), Error::<T>::Unauthorized);
            Ok(())
        }

        fn ensure_unpaused() -> DispatchResult {
            ensure!(!Paused::<T>::get(), Error::<T>::SystemPaused);
            Ok(())
        }

        fn ensure_not_blacklisted(account: &T::AccountId) -> DispatchResult {
            ensure!(!Blacklist::<T>::get(account), Error::<T>::AccountBlacklisted);
            Ok(())
        }

        /// An account marked at block `m` is clear again from block
        /// `m + CooldownPeriod` onwards.
        fn ensure_cooldown_clear(
            account: &T::AccountId,
            now: BlockNumberFor<T>,
        ) -> DispatchResult {
            if let Some(marker) = LastActivity::<T>::get(account) {
                ensure!(
                    now >= marker.saturating_add(T::CooldownPeriod::get()),
                    Error::<T>::CooldownActive
                );
            }
            Ok(())
        }

        /// Run `f` while holding the ledger's exclusive-execution token.
        ///
        /// A nested guarded call fails with `ReentrantCall` instead of
        /// observing the ledger mid-mutation. The token is released on every
        /// exit path, success or failure.
        pub fn with_entry_lock<R>(
            f: impl FnOnce() -> Result<R, DispatchError>,
        ) -> Result<R, DispatchError> {
            ensure!(!EntryLock::<T>::get(), Error::<T>::ReentrantCall);
            EntryLock::<T>::put(true);
            let result = f();
            EntryLock::<T>::kill();
            result
        }

        /// Move value between accounts. `TotalIssued` is untouched; all
        /// checks run before the first write.
        fn do_move(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
            let from_balance = Balances::<T>::get(from);
            ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
            if from == to {
                // Net-zero move; nothing to write.
                return Ok(());
            }
            let credited = Balances::<T>::get(to)
                .checked_add(amount)
                .ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, from_balance - amount);
            Balances::<T>::insert(to, credited);
            Ok(())
        }

        /// Credit `to` and grow `TotalIssued`, enforcing the supply ceiling.
        fn do_issue(to: &T::AccountId, amount: u128) -> DispatchResult {
            let issued = TotalIssued::<T>::get()
                .checked_add(amount)
                .ok_or(Error::<T>::Overflow)?;
            ensure!(issued <= T::MaxSupply::get(), Error::<T>::SupplyExceeded);
            let credited = Balances::<T>::get(to)
                .checked_add(amount)
                .ok_or(Error::<T>::Overflow)?;
            TotalIssued::<T>::put(issued);
            Balances::<T>::insert(to, credited);
            Ok(())
        }

        /// Debit `from` and shrink `TotalIssued`. The account key survives
        /// even at zero balance.
        fn do_redeem(from: &T::AccountId, amount: u128) -> DispatchResult {
            let balance = Balances::<T>::get(from);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);
            let issued = TotalIssued::<T>::get()
                .checked_sub(amount)
                .ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, balance - amount);
            TotalIssued::<T>::put(issued);
            Ok(())
        }

        /// Shared body of the feed sync path, also run once at genesis.
        /// Fails closed: any feed problem leaves the prior price in place.
        fn do_sync_price() -> DispatchResult {
            let sample = T::PriceFeed::latest_sample().ok_or(Error::<T>::OracleUnavailable)?;
            ensure!(sample.value > 0, Error::<T>::InvalidSample);
            let price = Self::rescale_sample(sample.value as u128, T::PriceFeed::decimals())?;
            CurrentPrice::<T>::put(price);
            LastPriceUpdate::<T>::put(T::TimeProvider::now().as_secs());
            Self::deposit_event(Event::PriceUpdated { price });
            log::debug!(
                target: "pallet-aurum-token",
                "price synced to {price} (feed published_at {})",
                sample.published_at
            );
            Ok(())
        }

        /// Rescale a positive feed sample to the ledger's 18-decimal fixed
        /// point. Unrepresentable values are rejected, never wrapped.
        fn rescale_sample(raw: u128, feed_decimals: u8) -> Result<u128, DispatchError> {
            if feed_decimals <= DECIMALS {
                let factor = 10u128
                    .checked_pow(u32::from(DECIMALS - feed_decimals))
                    .ok_or(Error::<T>::InvalidSample)?;
                raw.checked_mul(factor)
                    .ok_or_else(|| Error::<T>::InvalidSample.into())
            } else {
                let factor = 10u128
                    .checked_pow(u32::from(feed_decimals - DECIMALS))
                    .ok_or(Error::<T>::InvalidSample)?;
                Ok(raw / factor)
            }
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deployer account; receives the Owner and Pauser roles.
        pub owner: Option<T::AccountId>,
        /// Token display name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Initial issuance (account, amount); the sum must respect `MaxSupply`
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            // Set token metadata
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            // The deployer starts with the administrative and pause
            // capabilities; Minter and Bridge must be granted explicitly.
            if let Some(ref owner) = self.owner {
                Roles::<T>::insert(Role::Owner, owner, true);
                Roles::<T>::insert(Role::Pauser, owner, true);
            }

            // Credit initial balances under the supply ceiling
            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                let balance = Balances::<T>::get(account)
                    .checked_add(*amount)
                    .expect("Genesis balance overflow");
                Balances::<T>::insert(account, balance);
                total = total.checked_add(*amount).expect("Genesis supply overflow");
            }
            assert!(total <= T::MaxSupply::get(), "Genesis supply exceeds MaxSupply");
            TotalIssued::<T>::put(total);

            // First oracle sync. A dead feed cannot abort a chain build, so
            // failure just leaves the price at zero until the next sync.
            if let Err(e) = Pallet::<T>::do_sync_price() {
                log::warn!(
                    target: "pallet-aurum-token",
                    "genesis price sync failed: {e:?}; price left unset"
                );
            }
        }
    }
}
