//! Guesspot Game Contract
//!
//! A nearest-without-exceeding guessing game. A round manager opens a round
//! with a numeric question, a fixed pot and a per-guess fee; players pay the
//! fee to register guesses until the deadline; the round manager then reveals
//! the answer and the pot is split evenly among every player whose guess is
//! the greatest value not exceeding it.
//!
//! ## Game Flow
//! 1. Round manager calls `create_round` → the pot is pulled from the reserve
//!    account with `transfer_from` and the round opens.
//! 2. Players call `submit_guess` with the exact fee before the deadline.
//! 3. At or after the deadline, a round manager calls `finalize` with the
//!    answer → the winning guess and share are recorded, or the pot is
//!    refunded when nobody qualifies.
//! 4. Each winner calls `claim_prize` once to receive one share.
//!
//! ## Payout
//! `prize_per_winner = pot / winner_count` (floor). The remainder stays in
//! custody and is tracked as the stranded pot, recoverable only through
//! `sweep_stranded`. When nobody qualifies the whole pot returns to the
//! account it was escrowed from. Shares are pulled by the winners, so the
//! cost of `finalize` does not grow with the number of winners.
//!
//! ## Storage Strategy
//! - `instance()`: contract config (AccessControl, PotToken, FeeToken,
//!   Reserve) and counters (RoundCount, AccruedFees, StrandedPot, Locked).
//! - `persistent()`: per-round entries, TTL bumped on every write so an open
//!   round never expires mid-window:
//!   - `Round(id)`: round record, including its submission count.
//!   - `Submission(id, index)`: one entry per guess, in submission order.
//!   - `Guesses(id)`: each distinct guess value once.
//!   - `Guessers(id, guess)`: distinct players who guessed that value, in
//!     first-submission order.
//!   - `Guessed(id, guess, player)` / `Claimed(id, player)`: presence flags.
//!
//! ## Security
//! - Role checks go through the access-control contract after `require_auth`.
//! - Every call that moves tokens holds the `Locked` flag and commits all of
//!   its state before the first token call.
//! - Any failed token call surfaces as `TransferFailed`; the returned error
//!   rolls back the whole invocation, so a failed refund leaves the round open
//!   and a failed claim leaves the share unclaimed.
//! - A winner's claimed flag is set before its share is transferred.
#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::{
    contract, contracterror, contractevent, contractimpl, contracttype, token::TokenClient,
    Address, Env, String, Vec,
};

use guesspot_access_control::{AccessControlClient, Role};

mod settlement;

pub use settlement::{select_winning_guess, split_pot};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Upper bound on guesses per round. Bounds the value scan in `finalize` and
/// keeps each `Guessers` / `Guesses` entry well under the entry size limit.
pub const MAX_SUBMISSIONS_PER_ROUND: u32 = 500;

/// Largest page `get_submissions` returns.
pub const MAX_PAGE_SIZE: u32 = 50;

// ---------------------------------------------------------------------------
// Error Types
// ---------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized  = 1,
    NotInitialized      = 2,
    NotAuthorized       = 3,
    RoundNotFound       = 4,
    DeadlineNotInFuture = 5,
    SubmissionClosed    = 6,
    IncorrectFee        = 7,
    DeadlineNotPassed   = 8,
    AlreadyFinalized    = 9,
    NoFundsToWithdraw   = 10,
    TransferFailed      = 11,
    InvalidAmount       = 12,
    RoundFull           = 13,
    /// A token-moving call arrived while another one was still running.
    Reentrant           = 14,
    Overflow            = 15,
    NotFinalized        = 16,
    NotAWinner          = 17,
    AlreadyClaimed      = 18,
    SubmissionNotFound  = 19,
}

// ---------------------------------------------------------------------------
// Storage Types
// ---------------------------------------------------------------------------

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // --- instance() ---
    AccessControl,
    PotToken,
    FeeToken,
    /// Account future pots are escrowed from.
    Reserve,
    RoundCount,
    AccruedFees,
    /// Sum of indivisible pot remainders left in custody by `finalize`.
    StrandedPot,
    Locked,
    // --- persistent() ---
    Round(u64),
    Submission(u64, u32),
    Guesses(u64),
    Guessers(u64, u64),
    Guessed(u64, u64, Address),
    Claimed(u64, Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    pub question: String,
    pub submission_deadline: u64,
    pub pot_amount: i128,
    pub fee_amount: i128,
    /// Zero until the round is finalized.
    pub correct_answer: u64,
    pub is_finalized: bool,
    /// Account the pot was escrowed from; receives it back if nobody wins.
    pub funder: Address,
    pub submission_count: u32,
    /// Greatest guess not exceeding the answer, set by `finalize`.
    pub winning_guess: Option<u64>,
    pub winner_count: u32,
    pub prize_per_winner: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    pub player: Address,
    pub guess: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    pub access_control: Address,
    pub pot_token: Address,
    pub fee_token: Address,
    pub reserve: Address,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[contractevent]
pub struct Initialized {
    pub admin: Address,
    pub access_control: Address,
    pub pot_token: Address,
    pub fee_token: Address,
    pub reserve: Address,
}

#[contractevent]
pub struct RoundCreated {
    #[topic]
    pub round_id: u64,
    pub question: String,
    pub submission_deadline: u64,
    pub pot_amount: i128,
    pub fee_amount: i128,
}

#[contractevent]
pub struct GuessSubmitted {
    #[topic]
    pub round_id: u64,
    #[topic]
    pub player: Address,
    pub guess: u64,
}

#[contractevent]
pub struct WinnerSelected {
    #[topic]
    pub round_id: u64,
    pub correct_answer: u64,
    pub winning_guess: Option<u64>,
    pub winner_count: u32,
    pub prize_per_winner: i128,
}

#[contractevent]
pub struct PrizeClaimed {
    #[topic]
    pub round_id: u64,
    #[topic]
    pub player: Address,
    pub amount: i128,
}

#[contractevent]
pub struct PotRefunded {
    #[topic]
    pub round_id: u64,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
pub struct FeesWithdrawn {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
pub struct StrandedSwept {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
pub struct ReserveChanged {
    pub reserve: Address,
    pub admin: Address,
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct GuessGame;

#[contractimpl]
impl GuessGame {
    // -----------------------------------------------------------------------
    // init
    // -----------------------------------------------------------------------

    /// Initialize the game. May only be called once.
    ///
    /// `admin` must already hold `Role::Admin` in `access_control`. The
    /// reserve account has to approve this contract on `pot_token` before
    /// rounds can be created.
    pub fn init(
        env: Env,
        admin: Address,
        access_control: Address,
        pot_token: Address,
        fee_token: Address,
        reserve: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::AccessControl) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        if !AccessControlClient::new(&env, &access_control).has_role(&admin, &Role::Admin) {
            return Err(Error::NotAuthorized);
        }

        let instance = env.storage().instance();
        instance.set(&DataKey::AccessControl, &access_control);
        instance.set(&DataKey::PotToken, &pot_token);
        instance.set(&DataKey::FeeToken, &fee_token);
        instance.set(&DataKey::Reserve, &reserve);
        instance.set(&DataKey::RoundCount, &0u64);
        instance.set(&DataKey::AccruedFees, &0i128);
        instance.set(&DataKey::StrandedPot, &0i128);
        bump_instance(&env);

        Initialized {
            admin,
            access_control,
            pot_token,
            fee_token,
            reserve,
        }
        .publish(&env);

        Ok(())
    }

    /// Point future escrow pulls at a different reserve account. Admin only.
    ///
    /// Open rounds keep refunding to the account their pot came from.
    pub fn set_reserve(env: Env, admin: Address, reserve: Address) -> Result<(), Error> {
        require_initialized(&env)?;
        require_role(&env, &admin, Role::Admin)?;

        env.storage().instance().set(&DataKey::Reserve, &reserve);
        bump_instance(&env);

        ReserveChanged { reserve, admin }.publish(&env);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // create_round
    // -----------------------------------------------------------------------

    /// Open a new round and escrow its pot. Round manager only.
    ///
    /// Ids are sequential from 1. The pot is pulled from the reserve with
    /// `transfer_from`; if that pull fails nothing about the round persists.
    pub fn create_round(
        env: Env,
        caller: Address,
        question: String,
        deadline: u64,
        pot_amount: i128,
        fee_amount: i128,
    ) -> Result<u64, Error> {
        require_initialized(&env)?;
        require_role(&env, &caller, Role::RoundManager)?;

        if pot_amount <= 0 || fee_amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if deadline <= env.ledger().timestamp() {
            return Err(Error::DeadlineNotInFuture);
        }

        lock(&env)?;

        let round_id = get_round_count(&env)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        let reserve = get_address(&env, DataKey::Reserve)?;

        let round = Round {
            question: question.clone(),
            submission_deadline: deadline,
            pot_amount,
            fee_amount,
            correct_answer: 0,
            is_finalized: false,
            funder: reserve.clone(),
            submission_count: 0,
            winning_guess: None,
            winner_count: 0,
            prize_per_winner: 0,
        };
        set_persistent(&env, DataKey::Round(round_id), &round);
        env.storage().instance().set(&DataKey::RoundCount, &round_id);
        bump_instance(&env);

        let pot_token = get_address(&env, DataKey::PotToken)?;
        escrow_from(&env, &pot_token, &reserve, pot_amount)?;

        unlock(&env);

        RoundCreated {
            round_id,
            question,
            submission_deadline: deadline,
            pot_amount,
            fee_amount,
        }
        .publish(&env);

        Ok(round_id)
    }

    // -----------------------------------------------------------------------
    // submit_guess
    // -----------------------------------------------------------------------

    /// Register `guess` for `player`, who pays exactly the round's fee.
    ///
    /// Checks run in order: round exists, window still open, fee exact, round
    /// not full. Repeat guesses are accepted and each pays the fee.
    pub fn submit_guess(
        env: Env,
        player: Address,
        round_id: u64,
        guess: u64,
        fee: i128,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        player.require_auth();
        lock(&env)?;

        let mut round = get_round(&env, round_id)?;
        if env.ledger().timestamp() >= round.submission_deadline {
            return Err(Error::SubmissionClosed);
        }
        if fee != round.fee_amount {
            return Err(Error::IncorrectFee);
        }
        if round.submission_count >= MAX_SUBMISSIONS_PER_ROUND {
            return Err(Error::RoundFull);
        }

        let index = round.submission_count;
        set_persistent(
            &env,
            DataKey::Submission(round_id, index),
            &Submission {
                player: player.clone(),
                guess,
            },
        );
        round.submission_count = index + 1;
        set_persistent(&env, DataKey::Round(round_id), &round);
        record_guesser(&env, round_id, guess, &player);

        let accrued = get_i128(&env, DataKey::AccruedFees)
            .checked_add(fee)
            .ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::AccruedFees, &accrued);
        bump_instance(&env);

        if fee > 0 {
            let fee_token = get_address(&env, DataKey::FeeToken)?;
            collect(&env, &fee_token, &player, fee)?;
        }

        unlock(&env);

        GuessSubmitted {
            round_id,
            player,
            guess,
        }
        .publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // finalize
    // -----------------------------------------------------------------------

    /// Reveal the answer and record the outcome. Round manager only.
    ///
    /// Checks run in order: caller holds `RoundManager`, round exists,
    /// deadline reached, not yet finalized. The role check comes first, so a
    /// caller without the role gets `NotAuthorized` even for an unknown id.
    ///
    /// Winners are not paid here; each claims its share with `claim_prize`.
    /// When nothing qualifies the pot is refunded to its funder in this call,
    /// after the outcome is written. A failed refund returns `TransferFailed`
    /// and the round stays open for a retry.
    pub fn finalize(
        env: Env,
        caller: Address,
        round_id: u64,
        correct_answer: u64,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        require_role(&env, &caller, Role::RoundManager)?;
        lock(&env)?;

        let mut round = get_round(&env, round_id)?;
        if env.ledger().timestamp() < round.submission_deadline {
            return Err(Error::DeadlineNotPassed);
        }
        if round.is_finalized {
            return Err(Error::AlreadyFinalized);
        }

        let guesses: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::Guesses(round_id))
            .unwrap_or_else(|| Vec::new(&env));
        let winning_guess = settlement::select_winning_guess(&guesses, correct_answer);
        let winner_count = match winning_guess {
            Some(guess) => get_guessers(&env, round_id, guess).len(),
            None => 0,
        };
        let (prize_per_winner, remainder) = settlement::split_pot(round.pot_amount, winner_count)?;

        round.correct_answer = correct_answer;
        round.is_finalized = true;
        round.winning_guess = winning_guess;
        round.winner_count = winner_count;
        round.prize_per_winner = prize_per_winner;
        set_persistent(&env, DataKey::Round(round_id), &round);

        if winner_count > 0 && remainder > 0 {
            let stranded = get_i128(&env, DataKey::StrandedPot)
                .checked_add(remainder)
                .ok_or(Error::Overflow)?;
            env.storage().instance().set(&DataKey::StrandedPot, &stranded);
            bump_instance(&env);
        }

        if winner_count == 0 {
            let pot_token = get_address(&env, DataKey::PotToken)?;
            pay(&env, &pot_token, &round.funder, round.pot_amount)?;
            PotRefunded {
                round_id,
                to: round.funder.clone(),
                amount: round.pot_amount,
            }
            .publish(&env);
        }

        unlock(&env);

        WinnerSelected {
            round_id,
            correct_answer,
            winning_guess,
            winner_count,
            prize_per_winner,
        }
        .publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // claim_prize
    // -----------------------------------------------------------------------

    /// Pay `player` one share of a finalized round's pot. Returns the amount.
    ///
    /// A player who guessed the winning value several times still receives a
    /// single share. The claimed flag is written before the transfer.
    pub fn claim_prize(env: Env, player: Address, round_id: u64) -> Result<i128, Error> {
        require_initialized(&env)?;
        player.require_auth();
        lock(&env)?;

        let round = get_round(&env, round_id)?;
        if !round.is_finalized {
            return Err(Error::NotFinalized);
        }

        let claimed_key = DataKey::Claimed(round_id, player.clone());
        if env.storage().persistent().has(&claimed_key) {
            return Err(Error::AlreadyClaimed);
        }
        if !holds_winning_guess(&env, &round, round_id, &player) {
            return Err(Error::NotAWinner);
        }

        set_persistent(&env, claimed_key, &true);

        let amount = round.prize_per_winner;
        if amount > 0 {
            let pot_token = get_address(&env, DataKey::PotToken)?;
            pay(&env, &pot_token, &player, amount)?;
        }

        unlock(&env);

        PrizeClaimed {
            round_id,
            player,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    // -----------------------------------------------------------------------
    // Admin sweeps
    // -----------------------------------------------------------------------

    /// Send every accrued guess fee to `to`. Admin only. Returns the amount.
    pub fn withdraw_fees(env: Env, admin: Address, to: Address) -> Result<i128, Error> {
        require_initialized(&env)?;
        require_role(&env, &admin, Role::Admin)?;
        lock(&env)?;

        let amount = drain(&env, DataKey::AccruedFees)?;
        let fee_token = get_address(&env, DataKey::FeeToken)?;
        pay(&env, &fee_token, &to, amount)?;

        unlock(&env);

        FeesWithdrawn { to, amount }.publish(&env);
        Ok(amount)
    }

    /// Send the accumulated indivisible pot remainders to `to`. Admin only.
    pub fn sweep_stranded(env: Env, admin: Address, to: Address) -> Result<i128, Error> {
        require_initialized(&env)?;
        require_role(&env, &admin, Role::Admin)?;
        lock(&env)?;

        let amount = drain(&env, DataKey::StrandedPot)?;
        let pot_token = get_address(&env, DataKey::PotToken)?;
        pay(&env, &pot_token, &to, amount)?;

        unlock(&env);

        StrandedSwept { to, amount }.publish(&env);
        Ok(amount)
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn get_round(env: Env, round_id: u64) -> Result<Round, Error> {
        get_round(&env, round_id)
    }

    pub fn get_submission(env: Env, round_id: u64, index: u32) -> Result<Submission, Error> {
        get_round(&env, round_id)?;
        env.storage()
            .persistent()
            .get(&DataKey::Submission(round_id, index))
            .ok_or(Error::SubmissionNotFound)
    }

    /// Up to `limit` guesses starting at `start`, in submission order. The
    /// page is capped at `MAX_PAGE_SIZE`.
    pub fn get_submissions(
        env: Env,
        round_id: u64,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Submission>, Error> {
        let round = get_round(&env, round_id)?;
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(round.submission_count);

        let mut page: Vec<Submission> = Vec::new(&env);
        for index in start..end {
            if let Some(submission) = env
                .storage()
                .persistent()
                .get(&DataKey::Submission(round_id, index))
            {
                page.push_back(submission);
            }
        }
        Ok(page)
    }

    /// Winners of a finalized round in first-submission order; empty while
    /// the round is open or when no guess qualified.
    pub fn get_winners(env: Env, round_id: u64) -> Result<Vec<Address>, Error> {
        let round = get_round(&env, round_id)?;
        Ok(match (round.is_finalized, round.winning_guess) {
            (true, Some(guess)) => get_guessers(&env, round_id, guess),
            _ => Vec::new(&env),
        })
    }

    pub fn is_winner(env: Env, round_id: u64, player: Address) -> Result<bool, Error> {
        let round = get_round(&env, round_id)?;
        Ok(holds_winning_guess(&env, &round, round_id, &player))
    }

    pub fn has_claimed(env: Env, round_id: u64, player: Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Claimed(round_id, player))
    }

    pub fn round_count(env: Env) -> u64 {
        get_round_count(&env)
    }

    pub fn accrued_fees(env: Env) -> i128 {
        get_i128(&env, DataKey::AccruedFees)
    }

    pub fn stranded_pot(env: Env) -> i128 {
        get_i128(&env, DataKey::StrandedPot)
    }

    pub fn get_config(env: Env) -> Result<GameConfig, Error> {
        Ok(GameConfig {
            access_control: get_address(&env, DataKey::AccessControl)?,
            pot_token: get_address(&env, DataKey::PotToken)?,
            fee_token: get_address(&env, DataKey::FeeToken)?,
            reserve: get_address(&env, DataKey::Reserve)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn require_initialized(env: &Env) -> Result<(), Error> {
    if !env.storage().instance().has(&DataKey::AccessControl) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

/// Verify that `caller` signed the invocation and holds `role`.
fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), Error> {
    caller.require_auth();
    let access_control = get_address(env, DataKey::AccessControl)?;
    if !AccessControlClient::new(env, &access_control).has_role(caller, &role) {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// Take the reentrancy lock. An `Err` return anywhere after this rolls the
/// flag back together with the rest of the invocation's writes.
fn lock(env: &Env) -> Result<(), Error> {
    let locked: bool = env
        .storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false);
    if locked {
        return Err(Error::Reentrant);
    }
    env.storage().instance().set(&DataKey::Locked, &true);
    Ok(())
}

fn unlock(env: &Env) {
    env.storage().instance().remove(&DataKey::Locked);
}

fn get_address(env: &Env, key: DataKey) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&key)
        .ok_or(Error::NotInitialized)
}

fn get_i128(env: &Env, key: DataKey) -> i128 {
    env.storage().instance().get(&key).unwrap_or(0)
}

fn get_round_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::RoundCount)
        .unwrap_or(0)
}

fn get_round(env: &Env, round_id: u64) -> Result<Round, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Round(round_id))
        .ok_or(Error::RoundNotFound)
}

fn get_guessers(env: &Env, round_id: u64, guess: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Guessers(round_id, guess))
        .unwrap_or_else(|| Vec::new(env))
}

/// Index `player` under `guess` the first time they submit that value.
fn record_guesser(env: &Env, round_id: u64, guess: u64, player: &Address) {
    let flag = DataKey::Guessed(round_id, guess, player.clone());
    if env.storage().persistent().has(&flag) {
        return;
    }
    set_persistent(env, flag, &true);

    let mut guessers = get_guessers(env, round_id, guess);
    if guessers.is_empty() {
        let mut guesses: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::Guesses(round_id))
            .unwrap_or_else(|| Vec::new(env));
        guesses.push_back(guess);
        set_persistent(env, DataKey::Guesses(round_id), &guesses);
    }
    guessers.push_back(player.clone());
    set_persistent(env, DataKey::Guessers(round_id, guess), &guessers);
}

fn holds_winning_guess(env: &Env, round: &Round, round_id: u64, player: &Address) -> bool {
    match (round.is_finalized, round.winning_guess) {
        (true, Some(guess)) => env
            .storage()
            .persistent()
            .has(&DataKey::Guessed(round_id, guess, player.clone())),
        _ => false,
    }
}

/// Zero an instance counter and return what it held.
fn drain(env: &Env, key: DataKey) -> Result<i128, Error> {
    let amount = get_i128(env, key.clone());
    if amount <= 0 {
        return Err(Error::NoFundsToWithdraw);
    }
    env.storage().instance().set(&key, &0i128);
    Ok(amount)
}

/// Pull `amount` from `from` via allowance into this contract.
fn escrow_from(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let this = env.current_contract_address();
    match TokenClient::new(env, token).try_transfer_from(&this, from, &this, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Move `amount` from a signing `from` into this contract.
fn collect(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let this = env.current_contract_address();
    match TokenClient::new(env, token).try_transfer(from, &this, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Move `amount` out of custody to `to`.
fn pay(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let this = env.current_contract_address();
    match TokenClient::new(env, token).try_transfer(&this, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

fn set_persistent<T>(env: &Env, key: DataKey, value: &T)
where
    T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(&key, value);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
