//! Guesspot Access Control Contract
//!
//! Role membership for the Guesspot game contracts. Game contracts never keep
//! their own admin lists; they hold the address of this contract and ask
//! `has_role(caller, role)` after the caller has signed.
//!
//! ## Roles
//! - `Admin`: fee sweeps, config changes, and granting/revoking the lesser
//!   role. Bootstrapped to the owner at `init` and never granted afterwards.
//! - `RoundManager`: creating and finalizing rounds. Also bootstrapped to
//!   the owner; Admin holders may grant it to or revoke it from any account.
//!
//! ## Storage Strategy
//! - `instance()`: Owner.
//! - `persistent()`: one presence flag per `(role, account)` membership, TTL
//!   bumped on every write.
#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::{
    contract, contracterror, contractevent, contractimpl, contracttype, Address, Env,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

// ---------------------------------------------------------------------------
// Error Types
// ---------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized     = 2,
    NotAuthorized      = 3,
    /// Only `RoundManager` can be granted or revoked after `init`.
    RoleNotGrantable   = 4,
    RoleNotHeld        = 5,
}

// ---------------------------------------------------------------------------
// Storage Types
// ---------------------------------------------------------------------------

/// Capabilities a game contract can ask about.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin        = 0,
    RoundManager = 1,
}

#[contracttype]
pub enum DataKey {
    // --- instance() ---
    Owner,
    // --- persistent() ---
    /// Presence flag: `account` holds `role`.
    Member(Role, Address),
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[contractevent]
pub struct RoleGranted {
    #[topic]
    pub account: Address,
    pub role: Role,
    pub granted_by: Address,
}

#[contractevent]
pub struct RoleRevoked {
    #[topic]
    pub account: Address,
    pub role: Role,
    pub revoked_by: Address,
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct AccessControl;

#[contractimpl]
impl AccessControl {
    /// Initialize with `owner` holding both roles. May only be called once.
    pub fn init(env: Env, owner: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);

        for role in [Role::Admin, Role::RoundManager] {
            set_member(&env, role, &owner);
            RoleGranted {
                account: owner.clone(),
                role,
                granted_by: owner.clone(),
            }
            .publish(&env);
        }

        Ok(())
    }

    /// Grant `role` to `account`. Admin only; only `RoundManager` is grantable.
    ///
    /// Granting a role the account already holds is a no-op apart from the
    /// TTL bump and the event.
    pub fn grant_role(env: Env, admin: Address, account: Address, role: Role) -> Result<(), Error> {
        require_initialized(&env)?;
        require_admin(&env, &admin)?;
        require_grantable(role)?;

        set_member(&env, role, &account);

        RoleGranted {
            account,
            role,
            granted_by: admin,
        }
        .publish(&env);

        Ok(())
    }

    /// Revoke `role` from `account`. Admin only; only `RoundManager` is revocable.
    pub fn revoke_role(env: Env, admin: Address, account: Address, role: Role) -> Result<(), Error> {
        require_initialized(&env)?;
        require_admin(&env, &admin)?;
        require_grantable(role)?;

        let key = DataKey::Member(role, account.clone());
        if !env.storage().persistent().has(&key) {
            return Err(Error::RoleNotHeld);
        }
        env.storage().persistent().remove(&key);

        RoleRevoked {
            account,
            role,
            revoked_by: admin,
        }
        .publish(&env);

        Ok(())
    }

    /// Whether `account` currently holds `role`. Never fails; an
    /// uninitialized contract simply has no members.
    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        has_member(&env, role, &account)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn require_initialized(env: &Env) -> Result<(), Error> {
    if !env.storage().instance().has(&DataKey::Owner) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if !has_member(env, Role::Admin, caller) {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

fn require_grantable(role: Role) -> Result<(), Error> {
    match role {
        Role::RoundManager => Ok(()),
        Role::Admin => Err(Error::RoleNotGrantable),
    }
}

fn has_member(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Member(role, account.clone()))
}

fn set_member(env: &Env, role: Role, account: &Address) {
    let key = DataKey::Member(role, account.clone());
    env.storage().persistent().set(&key, &());
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
