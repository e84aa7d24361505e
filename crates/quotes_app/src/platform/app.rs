use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use quotes_core::{update, AppState, Msg};
use quotes_engine::{read_import_file, EngineHandle};
use quotes_logging::{quotes_debug, quotes_info, quotes_warn};

use super::cli::Args;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::persistence::Persistence;
use super::ui::commands::{parse_command, Command};
use super::ui::constants::*;
use super::ui::render::{category_lines, last_viewed_lines, Renderer};
use super::logging;

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = AppConfig::resolve(&args).context("loading configuration")?;
    logging::initialize(&settings);

    let persistence = Persistence::open(&settings.data_dir)
        .with_context(|| format!("opening data directory {:?}", settings.data_dir))?;
    let engine = settings
        .engine
        .map(EngineHandle::new)
        .transpose()
        .context("starting sync engine")?;
    if engine.is_none() {
        quotes_info!("Running offline; remote sync disabled");
    }
    let export_dir = std::env::current_dir().context("resolving current directory")?;

    let mut app = App::new(EffectRunner::new(persistence, engine, export_dir.clone()));
    app.start();

    let lines = spawn_stdin_reader();
    let mut last_tick = Instant::now();
    prompt();
    loop {
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(Some(line)) => {
                if !app.handle_command(parse_command(&line), &export_dir) {
                    break;
                }
                prompt();
            }
            Ok(None) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        for msg in app.runner.poll_engine() {
            app.dispatch(msg);
        }
        if last_tick.elapsed() >= TICK_INTERVAL {
            last_tick = Instant::now();
            app.dispatch(Msg::Tick);
        }
    }

    app.runner.shutdown();
    quotes_info!("Quote manager stopped");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
    renderer: Renderer,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            renderer: Renderer::new(true),
        }
    }

    fn start(&mut self) {
        let restore = self.runner.restore_msg();
        self.dispatch(restore);
    }

    /// Returns `false` when the user asked to quit.
    fn handle_command(&mut self, command: Command, default_export_dir: &Path) -> bool {
        quotes_debug!("Command {:?}", command);
        match command {
            Command::Show => {
                self.renderer.invalidate_display();
                self.dispatch(Msg::ShowNewQuote {
                    roll: rand::random(),
                });
            }
            Command::Add { text, category } => self.dispatch(Msg::AddQuote { text, category }),
            Command::Filter(filter) => self.dispatch(Msg::FilterSelected(filter)),
            Command::Categories => print_lines(category_lines(&self.state.view())),
            Command::Last => print_lines(last_viewed_lines(&self.state.view())),
            Command::Export(dir) => {
                self.runner
                    .set_export_dir(dir.unwrap_or_else(|| default_export_dir.to_path_buf()));
                self.dispatch(Msg::ExportRequested);
            }
            Command::Import(path) => {
                let msg = match read_import_file(&path) {
                    Ok(raw) => Msg::ImportText(raw),
                    Err(err) => {
                        quotes_warn!("Cannot read import file {:?}: {}", path, err);
                        Msg::ImportUnreadable(err.to_string())
                    }
                };
                self.dispatch(msg);
            }
            Command::Sync => self.dispatch(Msg::SyncRequested),
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => return false,
            Command::Empty => {}
            Command::Invalid(reason) => println!("{reason}; type `help` for commands"),
        }
        true
    }

    /// Runs `msg` and every follow-up it produces, rendering after each step.
    fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            let output = self.runner.run(effects);
            queue.extend(output.follow_ups);
            print_lines(output.alerts);
            if state.consume_dirty() {
                print_lines(self.renderer.render(&state.view()));
            }
            self.state = state;
        }
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn prompt() {
    print!("{PROMPT}");
    let _ = io::stdout().flush();
}

/// Forwards stdin lines; `None` marks end of input.
fn spawn_stdin_reader() -> mpsc::Receiver<Option<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(Some(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(None);
    });
    rx
}
