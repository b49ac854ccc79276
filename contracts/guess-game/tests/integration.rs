use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env, String,
};

use guesspot_access_control::{AccessControl, AccessControlClient, Role};
use guesspot_game::{GuessGame, GuessGameClient};

fn create_token<'a>(env: &'a Env, token_admin: &Address) -> (Address, StellarAssetClient<'a>) {
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_client = StellarAssetClient::new(env, &token_contract.address());
    (token_contract.address(), token_client)
}

/// Pot and fee share one token: custody must keep open pots, accrued fees and
/// stranded remainders apart.
#[test]
fn test_two_rounds_sharing_one_token() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(100);

    let owner = Address::generate(&env);
    let operator = Address::generate(&env);
    let reserve = Address::generate(&env);
    let token_admin = Address::generate(&env);

    let (token_addr, token_sac) = create_token(&env, &token_admin);
    let token = TokenClient::new(&env, &token_addr);

    let acl_id = env.register(AccessControl, ());
    let acl = AccessControlClient::new(&env, &acl_id);
    acl.init(&owner);
    acl.grant_role(&owner, &operator, &Role::RoundManager);

    let game_id = env.register(GuessGame, ());
    let game = GuessGameClient::new(&env, &game_id);
    game.init(&owner, &acl_id, &token_addr, &token_addr, &reserve);

    token_sac.mint(&reserve, &1_000);
    token.approve(&reserve, &game_id, &1_000, &(env.ledger().sequence() + 500));

    let q1 = String::from_str(&env, "Closing price of the index, rounded down?");
    let q2 = String::from_str(&env, "Attendance at the final?");
    let r1 = game.create_round(&operator, &q1, &200, &100, &2);
    let r2 = game.create_round(&operator, &q2, &300, &10, &2);
    assert_eq!((r1, r2), (1, 2));
    assert_eq!(token.balance(&game_id), 110);

    let players: [Address; 4] = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];
    for p in players.iter() {
        token_sac.mint(p, &10);
    }

    // Round 1: guesses 10, 20, 20, 50 against an answer of 30.
    game.submit_guess(&players[0], &r1, &10, &2);
    game.submit_guess(&players[1], &r1, &20, &2);
    game.submit_guess(&players[2], &r1, &20, &2);
    game.submit_guess(&players[3], &r1, &50, &2);

    // Round 2: three-way tie on a pot of 10.
    game.submit_guess(&players[0], &r2, &7, &2);
    game.submit_guess(&players[1], &r2, &7, &2);
    game.submit_guess(&players[2], &r2, &7, &2);

    assert_eq!(game.accrued_fees(), 14);
    assert_eq!(token.balance(&game_id), 124);

    // Round 2 is still open when round 1 settles.
    env.ledger().set_timestamp(200);
    game.finalize(&operator, &r1, &30);
    assert!(game.try_submit_guess(&players[3], &r1, &25, &2).is_err());
    game.submit_guess(&players[3], &r2, &99, &2);

    env.ledger().set_timestamp(300);
    game.finalize(&operator, &r2, &8);

    // Both pots are still in custody until the winners claim.
    assert_eq!(token.balance(&game_id), 126);
    assert_eq!(game.claim_prize(&players[1], &r1), 50);
    assert_eq!(game.claim_prize(&players[2], &r1), 50);
    for p in players[..3].iter() {
        assert_eq!(game.claim_prize(p, &r2), 3);
    }
    assert!(game.try_claim_prize(&players[3], &r2).is_err());

    // Each player started with 10 and paid a fee of 2 per guess.
    assert_eq!(token.balance(&players[0]), 10 - 2 - 2 + 3);
    assert_eq!(token.balance(&players[1]), 10 - 2 - 2 + 50 + 3);
    assert_eq!(token.balance(&players[2]), 10 - 2 - 2 + 50 + 3);
    assert_eq!(token.balance(&players[3]), 10 - 2 - 2);

    // Custody now holds accrued fees plus the 1-unit remainder of round 2.
    assert_eq!(game.accrued_fees(), 16);
    assert_eq!(game.stranded_pot(), 1);
    assert_eq!(token.balance(&game_id), 17);

    let treasury = Address::generate(&env);
    assert_eq!(game.withdraw_fees(&owner, &treasury), 16);
    assert_eq!(game.sweep_stranded(&owner, &treasury), 1);
    assert_eq!(token.balance(&treasury), 17);
    assert_eq!(token.balance(&game_id), 0);
    assert_eq!(token.balance(&reserve), 890);
}
