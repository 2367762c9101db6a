//! Integration tests for rounds 2+ pairing.

mod common;

use common::{
    id, pairs_by_sequence, played, players_covered, report_lower_sequence_wins,
    report_player_1_wins, rng, roster,
};
use swiss_pairing::{
    calculate_standings, pair_round, seed_round_one, Match, PairingHistory, RegistrationStatus,
    SeedingMode, SwissConfig, SwissError,
};

fn seeded_round_one_won_by_player_1(players: &[swiss_pairing::Registration]) -> Vec<Match> {
    report_player_1_wins(seed_round_one(players, SeedingMode::Seeded, &mut rng()).unwrap())
}

#[test]
fn winners_play_winners_and_losers_play_losers() {
    let players = roster(8);
    let round_one = seeded_round_one_won_by_player_1(&players);
    let round_two =
        pair_round(&players, &round_one, &SwissConfig::default(), 2, &mut rng()).unwrap();

    assert_eq!(round_two.len(), 4);
    assert!(round_two.iter().all(|m| !m.is_bye() && m.round == 2));
    assert_eq!(
        pairs_by_sequence(&players, &round_two),
        vec![(1, 3), (5, 7), (2, 4), (6, 8)]
    );
    let previous = pairs_by_sequence(&players, &round_one);
    for pair in pairs_by_sequence(&players, &round_two) {
        assert!(!previous.contains(&pair));
    }
}

#[test]
fn tables_follow_creation_order_and_bye_comes_last() {
    let mut players = roster(8);
    let round_one = seeded_round_one_won_by_player_1(&players);
    players[0].status = RegistrationStatus::Dropped;
    let round_two =
        pair_round(&players, &round_one, &SwissConfig::default(), 2, &mut rng()).unwrap();

    let tables: Vec<_> = round_two.iter().map(|m| m.table).collect();
    assert_eq!(tables, vec![Some(1), Some(2), Some(3), None]);
    assert!(round_two.last().unwrap().is_bye());
}

#[test]
fn drop_after_round_one_gives_three_matches_and_a_bye() {
    let mut players = roster(8);
    let round_one = seeded_round_one_won_by_player_1(&players);
    players[0].status = RegistrationStatus::Dropped;
    let round_two =
        pair_round(&players, &round_one, &SwissConfig::default(), 2, &mut rng()).unwrap();

    assert_eq!(round_two.len(), 4);
    assert_eq!(round_two.iter().filter(|m| !m.is_bye()).count(), 3);
    assert_eq!(round_two.iter().filter(|m| m.is_bye()).count(), 1);
    let dropped = id(&players, 1);
    assert!(round_two.iter().all(|m| !m.involves(dropped)));
    assert_eq!(players_covered(&players, &round_two), (2..=8).collect::<Vec<_>>());
}

#[test]
fn odd_winner_pairs_down_into_the_next_bracket() {
    let mut players = roster(8);
    let round_one = seeded_round_one_won_by_player_1(&players);
    players[0].status = RegistrationStatus::Dropped;
    let round_two =
        pair_round(&players, &round_one, &SwissConfig::default(), 2, &mut rng()).unwrap();

    // Winners 3, 5, 7 and losers 2, 4, 6, 8: the bye goes to 8, 7 pairs down to 2.
    assert_eq!(pairs_by_sequence(&players, &round_two), vec![(3, 5), (2, 7), (4, 6)]);
    let bye = round_two.last().unwrap();
    assert_eq!(bye.player_1, id(&players, 8));
}

#[test]
fn bye_goes_to_the_lowest_ranked_player() {
    let mut players = roster(8);
    let round_one = seeded_round_one_won_by_player_1(&players);
    players[0].status = RegistrationStatus::Dropped;
    let config = SwissConfig::default();
    let round_two = pair_round(&players, &round_one, &config, 2, &mut rng()).unwrap();

    let active: Vec<_> = players.iter().filter(|p| p.is_active()).cloned().collect();
    let standings = calculate_standings(&active, &round_one, &config, &mut rng());
    let lowest = standings.last().unwrap();

    let byes: Vec<&Match> = round_two.iter().filter(|m| m.is_bye()).collect();
    assert_eq!(byes.len(), 1);
    assert_eq!(byes[0].player_1, lowest.player_id());
    assert_eq!(lowest.match_points, 0);
    let result = byes[0].result.as_ref().unwrap();
    assert_eq!((result.player_1_wins, result.player_2_wins), (2, 0));
}

#[test]
fn bye_skips_players_who_already_had_one() {
    let players = roster(3);
    let (a, b, c) = (id(&players, 1), id(&players, 2), id(&players, 3));
    // c had the round 1 bye, a the round 2 bye.
    let log = vec![
        played(1, a, b, 2, 0),
        Match::bye(1, c),
        played(2, b, c, 2, 0),
        Match::bye(2, a),
    ];
    let round_three = pair_round(&players, &log, &SwissConfig::default(), 3, &mut rng());

    // a and c have had byes; b hasn't, so b sits out and a faces c.
    let round_three = round_three.unwrap();
    let bye = round_three.iter().find(|m| m.is_bye()).unwrap();
    assert_eq!(bye.player_1, b);
    assert_eq!(pairs_by_sequence(&players, &round_three), vec![(1, 3)]);
}

#[test]
fn top_player_pairs_down_two_brackets() {
    let players = roster(4);
    let (a, b, c, d) = (id(&players, 1), id(&players, 2), id(&players, 3), id(&players, 4));
    // a is 2-0 and has already played both 1-1 players.
    let log = vec![
        played(1, a, b, 2, 0),
        played(1, c, d, 2, 0),
        played(2, a, c, 2, 0),
        played(2, b, d, 2, 0),
    ];
    let round_three = pair_round(&players, &log, &SwissConfig::default(), 3, &mut rng()).unwrap();

    assert_eq!(pairs_by_sequence(&players, &round_three), vec![(2, 3), (1, 4)]);
    let top = round_three.iter().find(|m| m.involves(a)).unwrap();
    assert_eq!(top.player_1, a);
    assert_eq!(top.player_2, Some(d));
    assert_eq!(top.table, Some(2));
}

#[test]
fn rematch_is_never_produced() {
    let players = roster(2);
    let log = vec![played(1, id(&players, 1), id(&players, 2), 2, 0)];
    let err = pair_round(&players, &log, &SwissConfig::default(), 2, &mut rng()).unwrap_err();

    match err {
        SwissError::PairingImpossible { round, unpaired } => {
            assert_eq!(round, 2);
            assert_eq!(unpaired.len(), 2);
        }
        other => panic!("expected PairingImpossible, got {other:?}"),
    }
}

#[test]
fn greedy_cascade_can_run_out_of_brackets() {
    let players = roster(5);
    let round_one = report_lower_sequence_wins(
        &players,
        seed_round_one(&players, SeedingMode::Seeded, &mut rng()).unwrap(),
    );
    let round_two = report_lower_sequence_wins(
        &players,
        pair_round(&players, &round_one, &SwissConfig::default(), 2, &mut rng()).unwrap(),
    );
    let log: Vec<Match> = round_one.into_iter().chain(round_two).collect();

    assert!(matches!(
        pair_round(&players, &log, &SwissConfig::default(), 3, &mut rng()),
        Err(SwissError::PairingImpossible { round: 3, .. })
    ));
}

#[test]
fn scheduled_but_unreported_matches_block_rematches() {
    let players = roster(2);
    let log = vec![Match::new(1, id(&players, 1), id(&players, 2), 1)];
    assert!(matches!(
        pair_round(&players, &log, &SwissConfig::default(), 2, &mut rng()),
        Err(SwissError::PairingImpossible { .. })
    ));
}

#[test]
fn invalid_input_is_rejected_up_front() {
    let config = SwissConfig::default();
    assert!(matches!(
        pair_round(&[], &[], &config, 2, &mut rng()),
        Err(SwissError::InvalidInput(_))
    ));

    let dropped: Vec<_> = roster(2)
        .into_iter()
        .map(|r| r.with_status(RegistrationStatus::Dropped))
        .collect();
    assert!(matches!(
        pair_round(&dropped, &[], &config, 2, &mut rng()),
        Err(SwissError::InvalidInput(_))
    ));

    assert!(matches!(
        pair_round(&roster(4), &[], &config, 0, &mut rng()),
        Err(SwissError::InvalidInput(_))
    ));

    let mut duplicated = roster(3);
    duplicated.push(duplicated[0].clone());
    assert!(matches!(
        pair_round(&duplicated, &[], &config, 1, &mut rng()),
        Err(SwissError::InvalidInput(_))
    ));
}

#[test]
fn pairing_history_ignores_byes() {
    let players = roster(3);
    let (a, b, c) = (id(&players, 1), id(&players, 2), id(&players, 3));
    let history = PairingHistory::build(&[played(1, a, b, 2, 0), Match::bye(1, c)]);

    assert!(history.have_played(a, b));
    assert!(history.have_played(b, a));
    assert!(!history.have_played(a, c));
    assert_eq!(history.opponents(c).count(), 0);
    assert_eq!(history.opponents(a).collect::<Vec<_>>(), vec![b]);
}
