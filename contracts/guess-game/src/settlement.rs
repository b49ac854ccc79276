//! Winner selection and pot division.
//!
//! Both functions are pure over their inputs so `finalize` can compute the
//! whole outcome before it writes state or moves tokens.

use soroban_sdk::Vec;

use crate::Error;

/// Nearest-without-exceeding selection in a single pass over `guesses`.
///
/// `guesses` holds each distinct guess value of a round once. Returns the
/// greatest value not exceeding `correct_answer`, or `None` when nothing
/// qualifies. The running best starts unset rather than at zero, so a guess
/// of exactly `0` wins against an answer of `0`.
pub fn select_winning_guess(guesses: &Vec<u64>, correct_answer: u64) -> Option<u64> {
    let mut best: Option<u64> = None;

    for guess in guesses.iter() {
        if guess > correct_answer {
            continue;
        }
        match best {
            Some(current) if guess <= current => {}
            _ => best = Some(guess),
        }
    }

    best
}

/// Split `pot` evenly across `winner_count` winners with floor division.
///
/// Returns `(prize_per_winner, remainder)`. The remainder is never paid to a
/// winner. With no winners the whole pot is the remainder.
pub fn split_pot(pot: i128, winner_count: u32) -> Result<(i128, i128), Error> {
    if pot < 0 {
        return Err(Error::InvalidAmount);
    }
    if winner_count == 0 {
        return Ok((0, pot));
    }

    let count = winner_count as i128;
    let prize = pot.checked_div(count).ok_or(Error::Overflow)?;
    let remainder = pot.checked_rem(count).ok_or(Error::Overflow)?;
    Ok((prize, remainder))
}
