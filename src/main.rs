//! Slideline binary: wires the engine, input line and sequencer together.
//!
//! One select loop owns all state. The input actor and the ticker only
//! produce events; every mutation happens here, on this thread.

use crossbeam_channel::select;
use slideline::{
    Engine, InputEvent, KeyCode, Metrics, Sequencer, SequencerConfig, TextInput, Widget,
};
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let mut engine = Engine::new()?;
    let mut metrics = Metrics::from_size(engine.width(), engine.height());

    let mut input = TextInput::new(metrics.input_line());
    let mut sequencer = Sequencer::new(metrics.stage(), SequencerConfig::default());

    // Receivers are cloned out so the select loop never borrows the
    // components it mutates.
    let input_events = engine.input_receiver().clone();
    let ticks = sequencer.ticks().clone();

    draw(&mut engine, &mut sequencer, &mut input)?;

    while engine.is_running() {
        select! {
            recv(input_events) -> event => {
                if let Ok(event) = event {
                    handle_input(&mut engine, &mut metrics, &mut sequencer, &mut input, &event);
                } else {
                    engine.stop();
                }
            }
            recv(ticks) -> tick => {
                if tick.is_ok() && sequencer.on_tick().is_some() {
                    // Transition settled: hand the input line back to the user.
                    input.clear();
                    input.set_enabled(true);
                }
            }
            default(Duration::from_millis(50)) => {
                input.tick();
            }
        }

        if sequencer.needs_redraw() || input.needs_redraw() {
            draw(&mut engine, &mut sequencer, &mut input)?;
        }
    }

    Ok(())
}

/// React to one event from the input thread.
fn handle_input(
    engine: &mut Engine,
    metrics: &mut Metrics,
    sequencer: &mut Sequencer,
    input: &mut TextInput,
    event: &InputEvent,
) {
    match event {
        InputEvent::Key { code, modifiers } => match code {
            KeyCode::Esc => engine.stop(),
            KeyCode::Char('c') if modifiers.control => engine.stop(),
            KeyCode::Enter => {
                // Commit: the input stays disabled until the transition
                // settles. Empty text is valid content.
                if input.is_enabled() && sequencer.is_idle() {
                    let text = input.content().to_string();
                    input.set_enabled(false);
                    sequencer.submit(&text);
                }
            }
            _ => {
                input.handle_input(event);
            }
        },
        InputEvent::Resize { width, height } => {
            engine.handle_resize(*width, *height);
            *metrics = Metrics::from_size(*width, *height);
            sequencer.set_bounds(metrics.stage());
            input.set_bounds(metrics.input_line());
        }
        InputEvent::FocusGained => input.set_focused(true),
        InputEvent::FocusLost => input.set_focused(false),
        InputEvent::Paste(_) => {
            input.handle_input(event);
        }
        InputEvent::Shutdown | InputEvent::Error(_) => engine.stop(),
    }
}

/// Compose one frame and flush the diff to the terminal.
fn draw(engine: &mut Engine, sequencer: &mut Sequencer, input: &mut TextInput) -> io::Result<()> {
    engine.clear();
    sequencer.render(engine.buffer_mut());
    input.render(engine.buffer_mut());
    engine.present()?;
    sequencer.clear_redraw();
    input.clear_redraw();
    Ok(())
}
