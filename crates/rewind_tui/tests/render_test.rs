//! Rendering tests against ratatui's in-memory backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use rewind_tictactoe::{MoveOrder, Position};
use rewind_tui::{App, ScreenLayout, draw};

fn render(app: &App) -> Buffer {
    render_sized(app, 100, 30)
}

fn render_sized(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn play(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
            .expect("key handled");
    }
}

#[test]
fn test_initial_screen() {
    let app = App::new(MoveOrder::Ascending).expect("app");
    let screen = text(&render(&app));

    assert!(screen.contains("Rewind - Tic Tac Toe"));
    assert!(screen.contains("Next Player: X"));
    assert!(screen.contains("Moves (ascending)"));
    assert!(screen.contains("> Go to Game Start"));
}

#[test]
fn test_move_list_and_status_after_moves() {
    let mut app = App::new(MoveOrder::Descending).expect("app");
    play(&mut app, "53");
    let screen = text(&render(&app));

    assert!(screen.contains("Next Player: X"));
    assert!(screen.contains("Moves (descending)"));
    assert!(screen.contains("> Go to Move #2 (3, 1)"));
    assert!(screen.contains("  Go to Move #1 (2, 2)"));
    let newest = screen.find("Go to Move #2").expect("listed");
    let start = screen.find("Go to Game Start").expect("listed");
    assert!(newest < start);
}

#[test]
fn test_winning_line_is_highlighted() {
    let mut app = App::new(MoveOrder::Ascending).expect("app");
    play(&mut app, "12437");
    let buffer = render(&app);

    assert!(text(&buffer).contains("Winner: X"));

    let layout = ScreenLayout::new(*buffer.area());
    for pos in [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft] {
        let cell = layout.cells[pos.to_index()];
        assert_eq!(buffer[(cell.x, cell.y + 1)].bg, Color::Green, "{} should be highlighted", pos);
    }
    let center = layout.cells[Position::TopCenter.to_index()];
    assert_ne!(buffer[(center.x, center.y + 1)].bg, Color::Green);
}

#[test]
fn test_draw_status() {
    let mut app = App::new(MoveOrder::Ascending).expect("app");
    // X O X / X O O / O X X
    play(&mut app, "123546879");
    assert!(text(&render(&app)).contains("Draw"));
}

#[test]
fn test_short_terminal_keeps_current_move_visible() {
    let mut app = App::new(MoveOrder::Ascending).expect("app");
    play(&mut app, "123546879");

    let screen = text(&render_sized(&app, 100, 20));
    assert!(screen.contains("Draw"));
    assert!(screen.contains("> Go to Move #9 (3, 3)"));
    assert!(!screen.contains("Go to Game Start"));

    // Selecting the oldest entry scrolls back to the top.
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))
        .expect("key handled");
    for _ in 0..9 {
        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE))
            .expect("key handled");
    }
    let screen = text(&render_sized(&app, 100, 20));
    assert!(screen.contains("Go to Game Start"));
    assert!(!screen.contains("Go to Move #9"));
}
