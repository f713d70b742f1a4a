//! View layer tests: a live session rendered into a frame, no terminal I/O.

use neotris::core::{Effects, GameState};
use neotris::term::{Frame, GameView, Viewport};
use neotris::types::{GameAction, Phase};

fn frame_text(frame: &Frame) -> String {
    let mut out = String::new();
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            out.push(frame.get(x, y).map(|g| g.ch).unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_playing_session_renders_blocks_and_panel() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::HardDrop);

    let mut frame = Frame::new(0, 0);
    GameView::default().render(
        &game.snapshot(),
        &Effects::default(),
        Viewport::new(80, 30),
        &mut frame,
    );

    let text = frame_text(&frame);
    assert!(text.contains('█'), "locked piece should be visible");
    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("NEXT"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn test_pause_and_game_over_overlays() {
    let mut game = GameState::new(12345);
    game.apply_action(GameAction::Start);
    game.apply_action(GameAction::TogglePause);

    let view = GameView::default();
    let mut frame = Frame::new(0, 0);
    view.render(
        &game.snapshot(),
        &Effects::default(),
        Viewport::new(80, 30),
        &mut frame,
    );
    assert!(frame_text(&frame).contains("PAUSED"));

    game.apply_action(GameAction::TogglePause);
    while game.phase() == Phase::Playing {
        game.apply_action(GameAction::HardDrop);
    }
    view.render(
        &game.snapshot(),
        &Effects::default(),
        Viewport::new(80, 30),
        &mut frame,
    );
    let text = frame_text(&frame);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("ENTER TO RESTART"));
}

#[test]
fn test_render_into_reused_frame_resizes() {
    let game = GameState::new(1);
    let view = GameView::default();
    let mut frame = Frame::new(0, 0);

    view.render(
        &game.snapshot(),
        &Effects::default(),
        Viewport::new(80, 30),
        &mut frame,
    );
    assert_eq!((frame.width(), frame.height()), (80, 30));

    view.render(
        &game.snapshot(),
        &Effects::default(),
        Viewport::new(40, 20),
        &mut frame,
    );
    assert_eq!((frame.width(), frame.height()), (40, 20));
}
