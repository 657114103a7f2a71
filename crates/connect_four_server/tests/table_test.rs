//! Tests for the shared game table and its locking around the computer move.

use connect_four::{Difficulty, GameSettings, GameStatus, Mode, MoveError, Player, RandomMover};
use connect_four_server::GameTable;
use std::time::Duration;

fn ai_settings() -> GameSettings {
    GameSettings {
        mode: Mode::Ai,
        ..GameSettings::default()
    }
}

fn seeded_table(delay: Duration) -> GameTable {
    GameTable::with_selector(delay, Box::new(RandomMover::seeded(11)))
}

#[tokio::test]
async fn test_play_without_game() {
    let table = seeded_table(Duration::ZERO);
    assert_eq!(table.play(0).await, Err(MoveError::NoActiveGame));
    assert!(table.snapshot().await.is_none());
}

#[tokio::test]
async fn test_human_game_alternates() {
    let table = seeded_table(Duration::ZERO);
    table.start(GameSettings::default()).await;

    let report = table.play(2).await.expect("legal move");
    assert_eq!(report.human.player, Player::Red);
    assert_eq!(report.computer, None);

    let snapshot = table.snapshot().await.expect("game started");
    assert_eq!(snapshot.current, Player::Yellow);
    assert_eq!(snapshot.moves, 1);
}

#[tokio::test]
async fn test_computer_answers_each_move() {
    let table = seeded_table(Duration::ZERO);
    table.start(ai_settings()).await;

    let report = table.play(3).await.expect("legal move");
    let computer = report.computer.expect("computer replied");
    assert_eq!(computer.player, Player::Yellow);

    let snapshot = table.snapshot().await.expect("game started");
    assert_eq!(snapshot.moves, 2);
    assert_eq!(snapshot.current, Player::Red);
}

#[tokio::test]
async fn test_ai_game_plays_to_the_end() {
    let table = seeded_table(Duration::ZERO);
    table
        .start(GameSettings {
            mode: Mode::Ai,
            difficulty: Difficulty::Normal,
            ..GameSettings::default()
        })
        .await;

    loop {
        let snapshot = table.snapshot().await.expect("game started");
        if snapshot.is_over() {
            break;
        }
        assert_eq!(snapshot.current, Player::Red);
        let column = snapshot.playable[snapshot.playable.len() - 1];
        let report = table.play(column).await.expect("legal move");
        if let Some(computer) = report.computer {
            assert_eq!(computer.player, Player::Yellow);
        }
    }

    let snapshot = table.snapshot().await.expect("game started");
    assert!(snapshot.status.is_terminal());
    assert_eq!(table.play(0).await, Err(MoveError::GameOver));
}

#[tokio::test]
async fn test_lock_released_while_computer_thinks() {
    let table = seeded_table(Duration::from_millis(400));
    table.start(ai_settings()).await;

    let mover = table.clone();
    let pending = tokio::spawn(async move { mover.play(0).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let snapshot = tokio::time::timeout(Duration::from_millis(100), table.snapshot())
        .await
        .expect("snapshot not blocked by the thinking computer")
        .expect("game started");
    assert_eq!(snapshot.moves, 1);
    assert_eq!(snapshot.current, Player::Yellow);

    assert_eq!(table.play(1).await, Err(MoveError::AwaitingComputer));

    let report = pending.await.expect("task finished").expect("legal move");
    assert!(report.computer.is_some());
    let snapshot = table.snapshot().await.expect("game started");
    assert_eq!(snapshot.moves, 2);
    assert_eq!(snapshot.status, GameStatus::InProgress);
}

#[tokio::test]
async fn test_restart_during_thinking_discards_computer_move() {
    let table = seeded_table(Duration::from_millis(300));
    table.start(ai_settings()).await;

    let mover = table.clone();
    let pending = tokio::spawn(async move { mover.play(0).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    table.start(ai_settings()).await;

    let report = pending.await.expect("task finished").expect("legal move");
    assert_eq!(report.computer, None);
    let snapshot = table.snapshot().await.expect("game started");
    assert_eq!(snapshot.moves, 0);
    assert_eq!(snapshot.current, Player::Red);
}

#[tokio::test]
async fn test_reset_during_thinking() {
    let table = seeded_table(Duration::from_millis(300));
    table.start(ai_settings()).await;

    let mover = table.clone();
    let pending = tokio::spawn(async move { mover.play(0).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    table.reset().await;

    let report = pending.await.expect("task finished").expect("legal move");
    assert_eq!(report.computer, None);
    assert!(table.snapshot().await.is_none());
}
