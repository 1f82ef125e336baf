//! Register viewer state and logic.

use std::time::{Duration, Instant};
use crate::{Base, DisplayBase, SimContext};
use crate::display::{format_int, format_unsigned, format_float_bits};
use crate::speed::{SPEED_INDEX_MAX, SPEED_INDEX_MIN};

/// Steps taken per tick while running unthrottled.
const UNLIMITED_BATCH: u64 = 10_000;

/// A watched register.
#[derive(Debug, Clone)]
pub struct WatchedRegister {
    pub name: String,
    pub bits: i32,
}

/// Viewer application state.
pub struct ViewerApp {
    /// Pacing for the demo step loop.
    pub ctx: SimContext,
    /// Current display base (decimal or hex).
    pub display: DisplayBase,
    /// Show an ASCII column next to each register.
    pub show_ascii: bool,
    /// Registers being watched.
    pub registers: Vec<WatchedRegister>,
    /// Slider position, kept separately from the control so the UI can bound it.
    pub slider: usize,
    /// Is the demo loop running?
    pub running: bool,
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
    /// Steps executed so far.
    pub steps: u64,
    last_step: Instant,
}

impl ViewerApp {
    /// Create a viewer watching `values`, named `x0`, `x1`, ...
    pub fn new(values: Vec<i32>) -> Self {
        let ctx = SimContext::new();
        let slider = ctx.run_speed().index();
        let registers = values
            .into_iter()
            .enumerate()
            .map(|(i, bits)| WatchedRegister { name: format!("x{}", i), bits })
            .collect();

        Self {
            ctx,
            display: DisplayBase::default(),
            show_ascii: false,
            registers,
            slider,
            running: false,
            should_quit: false,
            status: "Ready. Press 'r' to run, 'h' to toggle hex, 'q' to quit.".into(),
            steps: 0,
            last_step: Instant::now(),
        }
    }

    /// Flip between decimal and hex.
    pub fn toggle_base(&mut self) {
        let base = self.display.toggle();
        self.status = format!("Display base: {}", base);
    }

    /// Try to make ASCII the default. The holder refuses, so this only
    /// reports the outcome; the ASCII column is the way to see it.
    pub fn request_ascii_default(&mut self) {
        self.display.set(Base::Ascii);
        self.show_ascii = !self.show_ascii;
        self.status = format!(
            "ASCII column {} (default base stays {})",
            if self.show_ascii { "on" } else { "off" },
            self.display.get()
        );
    }

    /// Move the speed slider by `delta` stops, bounded to the table.
    pub fn move_slider(&mut self, delta: isize) {
        let next = self.slider as isize + delta;
        self.slider = next.clamp(SPEED_INDEX_MIN as isize, SPEED_INDEX_MAX as isize) as usize;
        match self.ctx.run_speed().set_index(self.slider) {
            Ok(()) => self.status = self.ctx.run_speed().label(),
            Err(e) => self.status = format!("Error: {}", e),
        }
    }

    /// Start or pause the demo loop.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        self.last_step = Instant::now();
        self.status = if self.running { "Running...".into() } else { "Paused.".into() };
    }

    /// Advance the demo program by one step.
    ///
    /// x0 counts steps, every other register is rotated and mixed with its
    /// neighbour so all bases have something to show.
    pub fn step(&mut self) {
        self.steps += 1;
        let len = self.registers.len();
        if len == 0 {
            return;
        }
        self.registers[0].bits = self.registers[0].bits.wrapping_add(1);
        for i in 1..len {
            let prev = self.registers[i - 1].bits;
            let reg = &mut self.registers[i];
            reg.bits = reg.bits.rotate_left(1) ^ prev;
        }
    }

    /// Run one iteration of paced execution.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        match self.ctx.run_speed().step_delay() {
            None => {
                for _ in 0..UNLIMITED_BATCH {
                    self.step();
                }
            }
            Some(delay) => {
                if self.last_step.elapsed() >= delay {
                    self.last_step = Instant::now();
                    self.step();
                }
            }
        }
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self) -> Duration {
        match self.ctx.run_speed().step_delay() {
            Some(delay) if self.running => {
                delay.saturating_sub(self.last_step.elapsed()).min(Duration::from_millis(50))
            }
            _ => Duration::from_millis(50),
        }
    }

    /// Formatted rows: (name, signed, unsigned, float, ascii).
    pub fn rows(&self) -> Vec<[String; 5]> {
        let base = self.display.get();
        self.registers
            .iter()
            .map(|reg| {
                [
                    reg.name.clone(),
                    format_int(reg.bits, base),
                    format_unsigned(reg.bits, base),
                    format_float_bits(reg.bits, base),
                    if self.show_ascii { format_int(reg.bits, Base::Ascii) } else { String::new() },
                ]
            })
            .collect()
    }
}

/// Run the viewer over a set of register values.
pub fn run_viewer(values: Vec<i32>) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = ViewerApp::new(values);

    loop {
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        if event::poll(app.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('h') | KeyCode::Char('d') => app.toggle_base(),
                        KeyCode::Char('a') => app.request_ascii_default(),
                        KeyCode::Char('r') => app.toggle_running(),
                        KeyCode::Char('s') => {
                            app.running = false;
                            app.step();
                        }
                        KeyCode::Left => app.move_slider(-1),
                        KeyCode::Right => app.move_slider(1),
                        _ => {}
                    }
                }
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_is_bounded_by_ui() {
        let mut app = ViewerApp::new(vec![0]);
        app.move_slider(5);
        assert_eq!(app.slider, 40);
        app.move_slider(-100);
        assert_eq!(app.slider, 0);
        assert_eq!(app.ctx.run_speed().run_speed(), 0.05);
    }

    #[test]
    fn test_ascii_request_keeps_default() {
        let mut app = ViewerApp::new(vec![0x4142_4344]);
        app.toggle_base();
        app.request_ascii_default();
        assert_eq!(app.display.get(), Base::Hexadecimal);
        assert!(app.show_ascii);
        assert_eq!(app.rows()[0][4], " A B C D");
    }

    #[test]
    fn test_step_counts() {
        let mut app = ViewerApp::new(vec![-1, 1]);
        app.step();
        assert_eq!(app.registers[0].bits, 0);
        assert_eq!(app.steps, 1);
        assert_eq!(app.rows()[0][1], "0");
    }

    #[test]
    fn test_unlimited_tick_runs_batch() {
        let mut app = ViewerApp::new(vec![0]);
        app.toggle_running();
        app.tick();
        assert_eq!(app.steps, UNLIMITED_BATCH);
    }
}
