mod clock;
mod logging;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use ratatui::{DefaultTerminal, Frame};
use woolfall_config::ConfigSource;
use woolfall_core::FieldConfig;
use woolfall_field::{BallField, FrameLoop, PixelSurface, Surface};

use crate::clock::TerminalClock;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = logging::init()?;
    let (config, source) = woolfall_config::load()?;

    info!("woolfall {} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = log_path {
        debug!("logging to {}", path.display());
    }
    match &source {
        ConfigSource::File(path) => info!("using config {}", path.display()),
        ConfigSource::Defaults => info!("using default config"),
    }

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The terminal host: owns the surface, the frame clock and the field.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: FieldConfig,
    surface: PixelSurface,
    clock: TerminalClock,
    frame_loop: FrameLoop,
    rng: Pcg32,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: FieldConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("rng seed {seed}");
        Self {
            running: false,
            clock: TerminalClock::new(Duration::from_millis(config.frame_interval_ms)),
            config,
            surface: PixelSurface::new(0, 0),
            frame_loop: FrameLoop::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Size the surface to the terminal, create the field and run the main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.surface.resize_to_terminal(size.width, size.height);
        let mut field = BallField::new(
            &self.config,
            self.surface.width(),
            self.surface.height(),
            &mut self.rng,
        )?;
        info!("spawned {} wool balls", field.len());

        self.running = true;
        self.frame_loop.start(&mut self.clock);
        while self.running {
            if self.clock.take_due(Instant::now()) {
                self.frame_loop.tick(
                    &mut field,
                    &mut self.surface,
                    &mut self.rng,
                    &mut self.clock,
                );
                terminal.draw(|frame| self.render(frame))?;
            }
            self.handle_crossterm_events()?;
        }
        info!("exiting after {} frames", self.frame_loop.frames());
        Ok(())
    }

    /// Blit the surface into the frame.
    fn render(&self, frame: &mut Frame) {
        frame.render_widget(&self.surface, frame.area());
    }

    /// Reads the crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.clock.timeout(Instant::now()).unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Balls keep their positions; the next tick simulates against the new bounds.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        debug!("terminal resized to {cols}x{rows}");
        self.surface.resize_to_terminal(cols, rows);
    }

    /// Exit keys only; the animation itself takes no input.
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
