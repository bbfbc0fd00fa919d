//! Interactive demonstration of the memoized derivation.
//!
//! The first render stalls for a moment while the slow computation runs; every
//! re-render triggered by the button afterwards is instant, because the input
//! number never changes and the memo slot answers from cache. Run with
//! `RUST_LOG=debug` to see the diagnostic line exactly once.

use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, disable_raw_mode, enable_raw_mode,
};
use tracing_subscriber::EnvFilter;

use memocell::View;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut view = View::new();

    enable_raw_mode()?;
    let result = run(&mut view);
    disable_raw_mode()?;
    result
}

fn run(view: &mut View) -> Result<()> {
    let mut renders = 0u32;

    loop {
        // Commit queued mutations and redraw before blocking on input.
        if view.needs_render() {
            let frame = view.render();
            renders += 1;

            let mut out = stdout();
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            write!(out, "{}\r\n", frame.title)?;
            write!(out, "{}\r\n", frame.result)?;
            write!(out, "{}\r\n\r\n", frame.button)?;
            write!(
                out,
                "renders: {renders}  (enter/space = re-render, q = quit)\r\n"
            )?;
            out.flush()?;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => view.press_button(),
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    break;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
