use minesweeper::core::{FrameTicker, GameSession, Grid};
use minesweeper::types::{GameStatus, Outcome, Pos, FRAME_MS, NOTIFY_DELAY_MS};

fn session() -> GameSession {
    let grid = Grid::with_bombs(2, 2, 20, &[Pos::new(0, 0)]).unwrap();
    GameSession::from_grid(grid, 1.0).unwrap()
}

#[test]
fn frame_ticker_renders_first_frame() {
    let mut t = FrameTicker::new(FRAME_MS);
    assert!(t.tick(0));
}

#[test]
fn frame_ticker_throttles_between_frames() {
    let mut t = FrameTicker::new(FRAME_MS);
    assert!(t.tick(0));
    assert!(!t.tick(1));
    assert!(!t.tick(FRAME_MS - 1));
    assert!(t.tick(FRAME_MS));
}

#[test]
fn losing_frame_is_drawn_before_notification() {
    let mut game = session();
    let mut ticker = FrameTicker::new(FRAME_MS);
    assert!(ticker.tick(0));

    let status = game.pointer_down(10.0, 10.0, 5);
    assert_eq!(status, Some(GameStatus::GameOver(Outcome::Lost)));
    assert_eq!(game.next_notification_ms(), Some(5 + NOTIFY_DELAY_MS));

    // Several frames pass while the notification is pending.
    let mut frames_before_note = 0;
    let mut note = None;
    for now in 6..=5 + NOTIFY_DELAY_MS {
        if let Some(outcome) = game.poll_notification(now) {
            note = Some((now, outcome));
            break;
        }
        if ticker.tick(now) {
            frames_before_note += 1;
        }
    }

    assert_eq!(note, Some((5 + NOTIFY_DELAY_MS, Outcome::Lost)));
    assert!(frames_before_note >= 1);
}

#[test]
fn winning_click_schedules_single_notification() {
    let mut game = session();
    game.pointer_down(30.0, 10.0, 0);
    game.pointer_down(10.0, 30.0, 0);
    assert_eq!(game.pointer_down(30.0, 30.0, 0), Some(GameStatus::GameOver(Outcome::Won)));

    assert_eq!(game.poll_notification(NOTIFY_DELAY_MS), Some(Outcome::Won));
    assert_eq!(game.poll_notification(NOTIFY_DELAY_MS * 10), None);
}
