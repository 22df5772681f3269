use tui_blocks::core::{Board, Game, Piece};
use tui_blocks::term::{
    AnchorY, DisplayFlags, GameView, Viewport, HELP_TEXT, LAYOUT_HEIGHT, LAYOUT_WIDTH,
};
use tui_blocks::types::{Color, Command, Family};

fn view() -> GameView {
    GameView::default().with_anchor_y(AnchorY::Top)
}

fn vp() -> Viewport {
    Viewport::new(LAYOUT_WIDTH, LAYOUT_HEIGHT)
}

fn screen_text(fb: &tui_blocks::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_empty_cells_as_dots() {
    let snap = Game::new(1).snapshot();
    let fb = view().render(&snap, DisplayFlags::default(), vp());

    // Bottom row of the playfield is empty: ten " ." pairs.
    assert_eq!(&fb.row_text(19)[29..49], " .".repeat(10).as_str());
}

#[test]
fn term_view_renders_locked_cell_two_chars_wide() {
    let mut board = Board::new();
    board.set(0, 19, Some(Color::Red));
    let game = Game::with_pieces(
        1,
        board,
        Piece::new(Family::Square, Color::Yellow, 0),
        Piece::new(Family::T, Color::Blue, 0),
    );
    let fb = view().render(&game.snapshot(), DisplayFlags::default(), vp());

    let left = fb.get(29, 19).unwrap();
    let right = fb.get(30, 19).unwrap();
    assert_eq!((left.ch, right.ch), ('[', ']'));
    assert_eq!(left.style.fg, Some(Color::Red));
    assert_eq!(left.style.bg, Some(Color::Red));
}

#[test]
fn term_view_overlays_current_piece() {
    let game = Game::with_pieces(
        1,
        Board::new(),
        Piece::new(Family::Square, Color::Yellow, 0),
        Piece::new(Family::T, Color::Blue, 0),
    );
    let fb = view().render(&game.snapshot(), DisplayFlags::default(), vp());

    // Square at the spawn anchor covers board columns 4 and 5 of rows 0 and 1.
    for (bx, by) in [(4u16, 0u16), (5, 0), (4, 1), (5, 1)] {
        let cell = fb.get(29 + bx * 2, by).unwrap();
        assert_eq!(cell.ch, '[');
        assert_eq!(cell.style.bg, Some(Color::Yellow));
    }
}

#[test]
fn term_view_next_preview_follows_flag() {
    let game = Game::with_pieces(
        1,
        Board::new(),
        Piece::new(Family::Square, Color::Yellow, 0),
        Piece::new(Family::Line, Color::Green, 1),
    );
    let snap = game.snapshot();
    let mut flags = DisplayFlags::default();

    // Horizontal line: row 1 of the preview box, columns 0..3.
    let fb = view().render(&snap, flags, vp());
    assert_eq!(&fb.row_text(11)[13..21], "[][][][]");

    flags.apply(Command::ToggleNext);
    let fb = view().render(&snap, flags, vp());
    assert_eq!(fb.row_text(11)[13..21].trim(), "");
}

#[test]
fn term_view_help_lists_keys() {
    let snap = Game::new(1).snapshot();
    let text = screen_text(&view().render(&snap, DisplayFlags::default(), vp()));
    for line in HELP_TEXT {
        assert!(text.contains(line), "missing help line {:?}", line);
    }
}

#[test]
fn term_view_game_over_banner() {
    let mut game = Game::new(1);
    let running = screen_text(&view().render(&game.snapshot(), DisplayFlags::default(), vp()));
    assert!(!running.contains("Game over!"));

    game.apply(Command::Quit);
    let fb = view().render(&game.snapshot(), DisplayFlags::default(), vp());
    assert!(fb.row_text(22).starts_with("Game over!"));
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let snap = Game::new(1).snapshot();
    let fb = GameView::default().render(&snap, DisplayFlags::default(), Viewport::new(10, 5));
    assert_eq!((fb.width(), fb.height()), (10, 5));
}
