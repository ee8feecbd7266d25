//! Interactive Demo - Segmented code entry in the terminal.
//!
//! Demonstrates everything working together:
//! - Reactive box updates while typing
//! - Click-to-focus on the row
//! - Deferred full-fill notification at the settle point
//!
//! Type digits to fill the code, Backspace to edit, click the row to
//! refocus, `r` to reset after completion, Esc to quit.
//!
//! Run with: cargo run --example interactive

use std::cell::Cell;
use std::io::{stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{cursor, execute, terminal};
use spark_signals::{effect, signal};

use tui_code_input::input::{poll_event, route_event};
use tui_code_input::state::{interactions, press};
use tui_code_input::{code_input, on_key, render_lines, snapshot, CodeInputProps};

fn main() -> std::io::Result<()> {
    tui_code_input::reset_registry();

    let status = signal("Type the 6-digit code".to_string());

    let handle = code_input(CodeInputProps {
        auto_focus: true,
        one_time_code: true,
        on_change_code: Some(Rc::new({
            let status = status.clone();
            move |code| status.set(format!("code: {code}"))
        })),
        on_full_fill: Some(Rc::new({
            let status = status.clone();
            move |code| status.set(format!("full fill: {code}  (r resets, Esc quits)"))
        })),
        test_id: Some("demo-otp".to_string()),
        ..CodeInputProps::new(6)
    });

    terminal::enable_raw_mode()?;
    execute!(
        stdout(),
        terminal::EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )?;

    // The row is drawn starting at line 1; register its tap target
    let boxes = handle.box_indices();
    let row_style = handle.row_style();
    let row_width: u16 = {
        let snap = snapshot(&boxes);
        let box_width: u16 = snap.boxes.iter().map(|b| b.width.max(3)).sum();
        box_width + row_style.gap * (snap.boxes.len().saturating_sub(1)) as u16
    };
    press::set_hit_rect(handle.row_index(), 0, 1, row_width, 3);

    // Redraw whenever a box cell or the status changes
    let status_for_draw = status.clone();
    let boxes_for_draw = boxes.clone();
    let stop_render = effect(move || {
        let lines = render_lines(&snapshot(&boxes_for_draw), &row_style);
        let message = status_for_draw.get();

        let mut out = stdout();
        let _ = execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0));
        let _ = write!(out, "tui-code-input demo\r\n");
        for line in &lines {
            let _ = write!(out, "{line}\r\n");
        }
        let _ = write!(out, "\r\n{message}\r\n");
        let _ = write!(out, "click the row to focus\r\n");
        let _ = out.flush();
    });

    let quit = Rc::new(Cell::new(false));
    let quit_for_key = quit.clone();
    let esc_cleanup = on_key("Escape", move || {
        quit_for_key.set(true);
        true
    });

    // `r` only reaches the key handler while the entry is blurred, i.e.
    // after completion dismissed the keyboard
    let reset_status = status.clone();
    let shared_handle = Rc::new(handle);
    let handle_for_key = shared_handle.clone();
    let reset_cleanup = on_key("r", move || {
        handle_for_key.reset();
        handle_for_key.focus();
        reset_status.set("Type the 6-digit code".to_string());
        true
    });

    while !quit.get() {
        if let Some(event) = poll_event(Duration::from_millis(16))? {
            route_event(event);
        }
        interactions::flush();
    }

    stop_render();
    esc_cleanup();
    reset_cleanup();
    if let Ok(handle) = Rc::try_unwrap(shared_handle) {
        handle.unmount();
    }

    execute!(
        stdout(),
        cursor::Show,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    Ok(())
}
