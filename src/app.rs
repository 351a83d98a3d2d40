use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use rand::Rng;

use crate::game::TickOutcome;
use crate::input::{Command, command_for_key};
use crate::session::Session;
use crate::terminal_runtime::TerminalSession;

/// Runs the game until the player quits.
///
/// Drawing, input and ticks all happen on this thread: the input poll
/// blocks for at most the time left on the tick timer.
pub fn run<R: Rng>(session: &mut Session<R>, terminal: &mut TerminalSession) -> io::Result<()> {
    session.start(Instant::now());
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(&session.scene())?;
            dirty = false;
        }

        if event::poll(session.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match command_for_key(key) {
                        Some(Command::Quit) => {
                            info!("quit requested");
                            return Ok(());
                        }
                        Some(Command::Game(input)) => {
                            session.handle_input(input, Instant::now());
                            dirty = true;
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        if let Some(outcome) = session.on_timer(Instant::now()) {
            dirty |= outcome != TickOutcome::Idle;
        }
    }
}
