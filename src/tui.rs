//! TUI playback for algoviz.
//!
//! Interactive terminal playback using ratatui. A repeating tick advances
//! the visualizer by one step at the engine's configured interval while it
//! is playing; pausing stops the timer, reset rewinds without
//! regenerating, and the interval is adjustable within the supported
//! bounds at runtime. The play flag and interval live in the engine (the
//! sorts delegate to their playback controller), so the loop here only
//! owns the terminal and the wall clock.
//!
//! This module is only available with the `tui` feature.

use std::io::{self, Stdout};
use std::time::Instant;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::config::VizConfig;
use crate::error::{VizError, VizResult};
use crate::visualizer::{
    Algorithm, BinarySearchViz, MergeSortViz, QuickSortViz, StepReport, Visualizer,
};

/// Interval adjustment granularity for the +/- keys.
const INTERVAL_STEP_MS: u64 = 100;

/// Run the TUI playback loop for one algorithm and input array.
///
/// # Errors
///
/// Returns error if terminal initialization fails or a precondition for
/// the chosen algorithm is missing (e.g. no target for binary search).
pub fn run(
    algorithm: Algorithm,
    numbers: &[f64],
    target: Option<f64>,
    config: &VizConfig,
) -> VizResult<()> {
    let mut viz: Box<dyn Visualizer> = match algorithm {
        Algorithm::MergeSort => Box::new(MergeSortViz::new()),
        Algorithm::QuickSort => Box::new(QuickSortViz::new()),
        Algorithm::BinarySearch => {
            let mut search = BinarySearchViz::new();
            search.set_target(target.ok_or(VizError::NoTarget)?)?;
            Box::new(search)
        }
    };
    viz.set_array(numbers)?;
    configure_playback(viz.as_mut(), config);

    let mut tui = PlayerTui::new(viz)?;
    tui.event_loop()
}

/// Apply the configured interval and autoplay flag to an engine.
fn configure_playback(viz: &mut dyn Visualizer, config: &VizConfig) {
    viz.set_interval_ms(config.playback.interval_ms);
    if config.playback.autoplay {
        viz.toggle_playing();
    }
}

/// TUI playback view.
struct PlayerTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    viz: Box<dyn Visualizer>,
    steps_taken: usize,
    status: String,
    last_tick: Instant,
}

impl PlayerTui {
    /// Create and initialize the playback view.
    fn new(viz: Box<dyn Visualizer>) -> VizResult<Self> {
        enable_raw_mode()
            .map_err(|e| VizError::terminal(format!("failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| VizError::terminal(format!("failed to enter alternate screen: {e}")))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|e| VizError::terminal(format!("failed to create terminal: {e}")))?;

        Ok(Self {
            terminal,
            viz,
            steps_taken: 0,
            status: "Ready".to_string(),
            last_tick: Instant::now(),
        })
    }

    /// Main loop: draw, poll for keys, tick the playback timer.
    fn event_loop(&mut self) -> VizResult<()> {
        loop {
            self.render()?;
            if !self.handle_events()? {
                return Ok(());
            }
            self.tick();
        }
    }

    /// Advance the visualizer when playing and the interval has elapsed.
    fn tick(&mut self) {
        if !self.viz.is_playing() || self.last_tick.elapsed() < self.viz.interval() {
            return;
        }

        self.advance_once();
        self.last_tick = Instant::now();
    }

    fn advance_once(&mut self) {
        match self.viz.step_once() {
            Ok(StepReport::Advanced { description }) => {
                self.steps_taken += 1;
                self.status = description;
            }
            Ok(StepReport::Complete) => {
                // Empty traces never trip the engine's own end-of-trace
                // stop, so pause explicitly.
                self.viz.pause();
                self.status = "Complete".to_string();
            }
            Err(err) => {
                self.viz.pause();
                self.status = format!("Error: {err}");
            }
        }
    }

    /// Handle input events.
    ///
    /// Returns `Ok(false)` if the application should quit.
    fn handle_events(&mut self) -> VizResult<bool> {
        let poll_budget = std::time::Duration::from_millis(50);
        if event::poll(poll_budget)
            .map_err(|e| VizError::terminal(format!("event poll failed: {e}")))?
        {
            if let Event::Key(key) = event::read()
                .map_err(|e| VizError::terminal(format!("event read failed: {e}")))?
            {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                        KeyCode::Char(' ') => {
                            self.viz.toggle_playing();
                            self.status = if self.viz.is_playing() {
                                "Playing".to_string()
                            } else {
                                "Paused".to_string()
                            };
                        }
                        KeyCode::Char('s') => {
                            self.viz.pause();
                            self.advance_once();
                        }
                        KeyCode::Char('r') => {
                            self.viz.reset();
                            self.steps_taken = 0;
                            self.status = "Reset".to_string();
                        }
                        KeyCode::Char('+') | KeyCode::Char('=') => {
                            self.adjust_interval(false);
                        }
                        KeyCode::Char('-') => {
                            self.adjust_interval(true);
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(true)
    }

    /// Nudge the engine's interval one notch slower or faster; the engine
    /// clamps to the supported bounds.
    fn adjust_interval(&mut self, slower: bool) {
        let current = self.viz.interval_ms();
        let next = if slower {
            current.saturating_add(INTERVAL_STEP_MS)
        } else {
            current.saturating_sub(INTERVAL_STEP_MS)
        };
        self.viz.set_interval_ms(next);
        self.status = format!("Interval {} ms", self.viz.interval_ms());
    }

    /// Render the playback view.
    fn render(&mut self) -> VizResult<()> {
        let title = format!(" algoviz \u{2014} {} ", self.viz.algorithm());
        let view = self.viz.view();
        let complete = self.viz.is_complete();
        let progress = self.viz.step_count().map(|total| {
            let done = self.steps_taken.min(total);
            if total == 0 {
                1.0
            } else {
                done as f64 / total as f64
            }
        });
        let controls = self.controls_text(complete);

        self.terminal
            .draw(|frame| {
                let area = frame.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(6),
                        Constraint::Length(3),
                        Constraint::Length(7),
                    ])
                    .split(area);

                let state_block = Block::default()
                    .title(title.clone())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan));
                frame.render_widget(
                    Paragraph::new(view.clone()).block(state_block),
                    chunks[0],
                );

                if let Some(ratio) = progress {
                    let gauge = Gauge::default()
                        .block(Block::default().title(" Progress ").borders(Borders::ALL))
                        .gauge_style(Style::default().fg(Color::Green))
                        .ratio(ratio.clamp(0.0, 1.0));
                    frame.render_widget(gauge, chunks[1]);
                } else {
                    let block = Block::default().title(" Progress ").borders(Borders::ALL);
                    frame.render_widget(
                        Paragraph::new("(step count depends on the target)").block(block),
                        chunks[1],
                    );
                }

                let controls_block = Block::default()
                    .title(" Controls ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray));
                frame.render_widget(
                    Paragraph::new(controls.clone()).block(controls_block),
                    chunks[2],
                );
            })
            .map_err(|e| VizError::terminal(format!("render failed: {e}")))?;

        Ok(())
    }

    fn controls_text(&self, complete: bool) -> String {
        let status = if complete {
            "COMPLETE"
        } else if self.viz.is_playing() {
            "PLAYING"
        } else {
            "PAUSED"
        };
        format!(
            "Status: {status}  |  Interval: {} ms\n\n\
             [Space] Play/Pause  [S] Step  [R] Reset\n\
             [+]/[-] Faster/Slower  [Q] Quit\n\n\
             {}",
            self.viz.interval_ms(),
            self.status
        )
    }

    /// Restore terminal state.
    fn restore_terminal(&mut self) -> VizResult<()> {
        disable_raw_mode()
            .map_err(|e| VizError::terminal(format!("failed to disable raw mode: {e}")))?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| VizError::terminal(format!("failed to leave alternate screen: {e}")))?;
        self.terminal
            .show_cursor()
            .map_err(|e| VizError::terminal(format!("failed to show cursor: {e}")))?;
        Ok(())
    }
}

impl Drop for PlayerTui {
    fn drop(&mut self) {
        // Best effort to restore terminal
        let _ = self.restore_terminal();
    }
}
