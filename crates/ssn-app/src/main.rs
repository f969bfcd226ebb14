//! Main application entry point

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ssn_core::{NavigationEngine, MAX_INDEX};
use ssn_data::{load_config, region_for_area, AppConfig, VirtualScroller};

mod command;

use command::{Command, HELP};

/// Main application state
struct NavigatorApp {
    /// Search navigation over the identifier list
    engine: NavigationEngine,

    /// Displayed window; follows every navigation result
    scroller: Arc<VirtualScroller>,
}

impl NavigatorApp {
    fn new(config: AppConfig) -> Self {
        let engine = NavigationEngine::new(config.search);
        let scroller = Arc::new(VirtualScroller::new(&config.scroller));
        engine.add_subscriber(scroller.clone());

        Self { engine, scroller }
    }

    /// Run one command; returns false when the user asked to quit
    fn execute(&self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Search(text) => {
                let result = self.engine.search(&text, &self.scroller.viewport());
                self.report(result.is_some(), &format!("no match for {:?}", text), out)?;
            }
            Command::Next => {
                let result = self.engine.next(&self.scroller.viewport());
                self.report(result.is_some(), "no active search", out)?;
            }
            Command::Previous => {
                let result = self.engine.previous(&self.scroller.viewport());
                self.report(result.is_some(), "no active search", out)?;
            }
            Command::Goto(index) => {
                if index >= MAX_INDEX {
                    writeln!(out, "index must be below {}", MAX_INDEX)?;
                } else {
                    self.scroller.set_position(i128::from(index));
                    self.show(out)?;
                }
            }
            Command::Jump(text) => match self.scroller.jump_to_identifier(&text) {
                Ok(_) => self.show(out)?,
                Err(err) => writeln!(out, "{}", err)?,
            },
            Command::Scroll(delta) => {
                self.scroller.scroll_by(delta);
                self.show(out)?;
            }
            Command::Show => self.show(out)?,
            Command::History => {
                let history = self.engine.history();
                if history.is_empty() {
                    writeln!(out, "history is empty")?;
                }
                for (depth, hit) in history.iter().enumerate() {
                    writeln!(
                        out,
                        "{:>3}  {}  #{:<10} {:?}",
                        depth, hit.identifier, hit.index, hit.source
                    )?;
                }
            }
            Command::Reset => {
                self.engine.reset();
                writeln!(out, "search cleared")?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn report(&self, found: bool, miss: &str, out: &mut impl Write) -> Result<()> {
        if found {
            self.show(out)
        } else {
            writeln!(out, "{}", miss)?;
            Ok(())
        }
    }

    /// Print the displayed rows, marking the current identifier
    fn show(&self, out: &mut impl Write) -> Result<()> {
        let current = self.engine.current();
        if let Some(query) = self.engine.query() {
            writeln!(out, "search: {}", query)?;
        }
        for entry in self.scroller.displayed() {
            let marker = if Some(entry.identifier) == current { '>' } else { ' ' };
            writeln!(
                out,
                "{} {}  #{:<10} {}",
                marker,
                entry.identifier,
                entry.index,
                region_for_area(entry.identifier.area())
            )?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            load_config(&path).with_context(|| format!("Failed to load config {}", path))?
        }
        None => AppConfig::default(),
    };
    info!("Starting identifier navigator with {:?}", config);

    let app = NavigatorApp::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.show(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Some(command)) => {
                if !app.execute(command, &mut stdout)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => writeln!(stdout, "{}", err)?,
        }
        stdout.flush()?;
    }

    Ok(())
}
