//! Benchmarking setup for pallet-aurum-token

use super::*;

#[allow(unused)]
use crate::Pallet as AurumToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const UNIT: u128 = 1_000_000_000_000_000_000;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = UNIT;

        // Setup: give the caller funds to move
        Balances::<T>::insert(&caller, 10 * UNIT);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        let amount: u128 = 5 * UNIT;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount);

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let source: T::AccountId = account("source", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = UNIT;

        // Setup: fund the source and let the spender draw on it
        Balances::<T>::insert(&source, 10 * UNIT);
        Allowances::<T>::insert(&source, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), source.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&source, &spender), 0);
    }

    #[benchmark]
    fn mint() {
        let minter: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = UNIT;

        Roles::<T>::insert(Role::Minter, &minter, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn bridge_mint() {
        let bridge: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = UNIT;

        Roles::<T>::insert(Role::Bridge, &bridge, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(bridge), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn bridge_burn() {
        let bridge: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let amount: u128 = UNIT;

        Roles::<T>::insert(Role::Bridge, &bridge, true);
        Balances::<T>::insert(&holder, amount);
        TotalIssued::<T>::mutate(|total| *total = total.saturating_add(amount));

        #[extrinsic_call]
        _(RawOrigin::Signed(bridge), holder.clone(), amount);

        assert_eq!(Balances::<T>::get(&holder), 0);
    }

    #[benchmark]
    fn pause() {
        let pauser: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Pauser, &pauser, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(pauser));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let pauser: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Pauser, &pauser, true);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(pauser));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn set_blacklisted() {
        let owner: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        Roles::<T>::insert(Role::Owner, &owner, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), target.clone(), true);

        assert_eq!(Blacklist::<T>::get(&target), true);
    }

    #[benchmark]
    fn update_metadata() {
        let owner: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Owner, &owner, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), b"Aurum Token".to_vec(), b"AUR".to_vec());

        assert_eq!(TokenSymbol::<T>::get().into_inner(), b"AUR".to_vec());
    }

    #[benchmark]
    fn set_price() {
        let owner: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Owner, &owner, true);
        // Setup: make sure the override window is open
        LastPriceUpdate::<T>::put(0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 2 * UNIT);

        assert_eq!(CurrentPrice::<T>::get(), 2 * UNIT);
    }

    #[benchmark]
    fn sync_price() {
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(CurrentPrice::<T>::get() > 0);
    }

    #[benchmark]
    fn grant_role() {
        let owner: T::AccountId = whitelisted_caller();
        let delegate: T::AccountId = account("delegate", 0, 0);
        Roles::<T>::insert(Role::Owner, &owner, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), Role::Minter, delegate.clone());

        assert_eq!(Roles::<T>::get(Role::Minter, &delegate), true);
    }

    #[benchmark]
    fn revoke_role() {
        let owner: T::AccountId = whitelisted_caller();
        let delegate: T::AccountId = account("delegate", 0, 0);
        Roles::<T>::insert(Role::Owner, &owner, true);
        Roles::<T>::insert(Role::Minter, &delegate, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), Role::Minter, delegate.clone());

        assert_eq!(Roles::<T>::get(Role::Minter, &delegate), false);
    }

    impl_benchmark_test_suite!(AurumToken, crate::mock::new_test_ext(), crate::mock::Test);
}
