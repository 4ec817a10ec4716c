use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use livecode::app::{Playground, Services, Workbench};
use livecode::kernel::services::adapters::{
    ensure_session_dir, ensure_settings_file, load_settings, DocumentPreview, FileStore,
    ProcessFormatter,
};
use livecode::tui::{TerminalDisplayHost, TerminalGuard, TerminationSignal};
use livecode::ui::backend::terminal::RatatuiTerminal;
use livecode::views::CodeEditor;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

const USAGE: &str = "\
livecode - live HTML/CSS/JS playground in the terminal

USAGE:
    livecode [OPTIONS]

OPTIONS:
    --session <DIR>    directory the three buffers are saved in
    --preview <FILE>   write every composed document to FILE
    -h, --help         print this help
";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    session: Option<PathBuf>,
    preview: Option<PathBuf>,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut out = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => out.help = true,
            "--session" | "--preview" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("{} needs a value", arg))?;
                if arg == "--session" {
                    out.session = Some(PathBuf::from(value));
                } else {
                    out.preview = Some(PathBuf::from(value));
                }
            }
            other => {
                if let Some(value) = other.strip_prefix("--session=") {
                    out.session = Some(PathBuf::from(value));
                } else if let Some(value) = other.strip_prefix("--preview=") {
                    out.preview = Some(PathBuf::from(value));
                } else {
                    return Err(format!("unknown argument: {}", other));
                }
            }
        }
    }
    Ok(out)
}

fn main() -> io::Result<()> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("livecode: {}\n\n{}", msg, USAGE);
            std::process::exit(2);
        }
    };
    if args.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let mut logging = logging::init();
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable");
    }
    let settings = load_settings();

    let session_dir = match args.session {
        Some(dir) => dir,
        None => ensure_session_dir()?,
    };
    let preview_path = args.preview.or_else(|| settings.preview.path.clone());
    tracing::info!(
        session = %session_dir.display(),
        preview = ?preview_path,
        formatter = %settings.formatter.command,
        "starting"
    );

    let services = Services {
        preview: DocumentPreview::new(preview_path),
        storage: Box::new(FileStore::new(session_dir)),
        formatter: Box::new(ProcessFormatter::from_settings(&settings.formatter)),
        display: Box::new(TerminalDisplayHost::new()),
    };
    let playground = Playground::new(CodeEditor::new, services, settings.layout.settle_delay());

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    if let Err(e) = livecode::tui::install_termination_signals(guard.restorer(), signal_tx) {
        tracing::warn!(error = %e, "signal handlers not installed");
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let (width, height) = crossterm::terminal::size()?;
    let mut workbench = Workbench::new(playground, width, height);
    if let Some(rx) = log_rx {
        workbench = workbench.with_log_rx(rx);
    }

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let result = run(&mut terminal, &mut workbench, &signal_rx);

    drop(guard);
    tracing::info!("exited");
    result
}

fn run(
    terminal: &mut RatatuiTerminal,
    workbench: &mut Workbench,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "shutting down");
            return Ok(());
        }
        if workbench.should_quit() {
            return Ok(());
        }

        if dirty {
            terminal.draw(|backend, area| workbench.render(backend, area))?;
            dirty = false;
        }

        let now = Instant::now();
        let timeout = workbench
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(POLL_INTERVAL))
            .unwrap_or(POLL_INTERVAL);

        if crossterm::event::poll(timeout)? {
            let event = livecode::tui::crossterm::into_input_event(crossterm::event::read()?);
            dirty |= workbench.handle_input(&event);
        }
        dirty |= workbench.tick(Instant::now());
    }
}
