use holdem_duel_engine::config::TableConfig;
use holdem_duel_engine::engine::Engine;
use holdem_duel_engine::game::Round;
use holdem_duel_engine::logger::{ActionRecord, HandRecord, OutcomeReason};
use holdem_duel_engine::player::{PlayerAction, Seat};

fn played() -> Engine {
    let config = TableConfig {
        seed: Some(2024),
        ..TableConfig::default()
    };
    let mut eng = Engine::start(&config).expect("start session");
    eng.bet(10).unwrap();
    eng.raise(10).unwrap();
    eng.check().unwrap();
    eng.fold().unwrap();
    eng
}

#[test]
fn record_logs_both_seats_in_order() {
    let rec = played().hand_record();
    assert_eq!(rec.seed, Some(2024));
    assert_eq!(
        rec.actions,
        vec![
            ActionRecord {
                seat: Seat::Player,
                round: Round::PreFlop,
                action: PlayerAction::Bet(10),
                pot_after: 10,
            },
            ActionRecord {
                seat: Seat::Player,
                round: Round::PreFlop,
                action: PlayerAction::Raise(10),
                pot_after: 30,
            },
            ActionRecord {
                seat: Seat::Computer,
                round: Round::PreFlop,
                action: PlayerAction::Call,
                pot_after: 50,
            },
            ActionRecord {
                seat: Seat::Player,
                round: Round::PreFlop,
                action: PlayerAction::Check,
                pot_after: 50,
            },
            ActionRecord {
                seat: Seat::Player,
                round: Round::Flop,
                action: PlayerAction::Fold,
                pot_after: 50,
            },
        ]
    );
    let outcome = rec.outcome.expect("fold settles the hand");
    assert_eq!(outcome.reason, OutcomeReason::PlayerFolded);
    assert_eq!(outcome.pot, 50);
}

#[test]
fn record_keeps_the_full_board() {
    let eng = played();
    let rec = eng.hand_record();
    assert_eq!(rec.board.len(), 5);
    assert!(eng.snapshot().community.len() < 5);
}

#[test]
fn hand_record_serializes_as_one_json_line() {
    let rec = played().hand_record();
    let line = rec.to_json_line().expect("serialize");
    assert!(!line.contains('\n'));
    assert!(line.contains("\"started_at\":"));
    let back: HandRecord = serde_json::from_str(&line).expect("deserialize");
    assert_eq!(rec, back);
}

#[test]
fn started_at_is_rfc3339_utc() {
    let rec = played().hand_record();
    assert!(rec.started_at.ends_with('Z'), "got {}", rec.started_at);
    assert_eq!(rec.started_at.len(), "2025-01-02T03:04:05Z".len());
}
