use holdem_duel_engine::config::TableConfig;
use holdem_duel_engine::engine::Engine;
use holdem_duel_engine::errors::GameError;
use holdem_duel_engine::player::PlayerAction;

fn finished_by(actions: &[PlayerAction]) -> Engine {
    let config = TableConfig {
        seed: Some(21),
        ..TableConfig::default()
    };
    let mut eng = Engine::start(&config).expect("start session");
    for &a in actions {
        eng.apply(a).expect("scripted action is legal");
    }
    assert!(eng.is_game_over());
    eng
}

fn assert_locked(mut eng: Engine) {
    let before = eng.snapshot();
    for action in [
        PlayerAction::Check,
        PlayerAction::Bet(10),
        PlayerAction::Call,
        PlayerAction::Raise(10),
        PlayerAction::Fold,
        PlayerAction::NextRound,
    ] {
        match eng.apply(action) {
            Err(GameError::InvalidActionForState { .. }) => {}
            other => panic!("{action:?} after game over returned {other:?}"),
        }
    }
    assert_eq!(eng.snapshot(), before);
}

#[test]
fn fold_locks_the_session() {
    assert_locked(finished_by(&[PlayerAction::Bet(10), PlayerAction::Fold]));
}

#[test]
fn showdown_locks_the_session() {
    assert_locked(finished_by(&[
        PlayerAction::Check,
        PlayerAction::Check,
        PlayerAction::Check,
        PlayerAction::Check,
    ]));
}

#[test]
fn reveal_is_still_allowed_after_game_over() {
    let mut eng = finished_by(&[PlayerAction::Fold]);
    let snap = eng.reveal_computer_hand();
    assert!(snap.computer_hand.is_some());
    assert!(snap.game_over);
}
