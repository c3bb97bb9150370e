use std::fs::File;
use std::io;
use std::io::Write;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableFocusChange;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableFocusChange;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sparselife::app::App;
use sparselife::app::Control;
use sparselife::config::Config;
use sparselife::events::Event;
use sparselife::io::InputState;
use sparselife::io::viewport_for;
use sparselife::render::Canvas;

const FRAMERATE: u32 = 60;
const FRAMETIME: Duration = Duration::from_millis((1_000 / FRAMERATE) as u64);

/// Puts the terminal back the way we found it, however we leave.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            cursor::Hide,
        )?;

        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableFocusChange,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }

        // The screen belongs to the simulation, so keep stderr quiet unless asked otherwise
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(io::stderr)
                .init();
        }
    }

    Ok(())
}

fn draw(stdout: &mut impl Write, app: &App, canvas: &mut Canvas) -> io::Result<()> {
    canvas.reset();
    app.draw(canvas);

    queue!(
        stdout,
        terminal::BeginSynchronizedUpdate,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for line in canvas.render().lines() {
        queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    queue!(
        stdout,
        style::Print(app.status_line()),
        terminal::EndSynchronizedUpdate,
    )?;

    stdout.flush()
}

fn run(config: &Config) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    // Get the width and height of the terminal
    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let (width, height) = viewport_for(cols, rows);

    let mut app = App::with_glider(config, width, height);
    let mut canvas = Canvas::new(width, height);
    let mut input = InputState::new();

    let start = Instant::now();

    'main: loop {
        let t = Instant::now();

        // Drain everything that happened since the last frame
        while event::poll(Duration::ZERO)? {
            for event in input.convert_event(event::read()?) {
                if let Event::Resize { width, height } = event {
                    canvas.resize(width, height);
                }

                if app.dispatch(event) == Control::Exit {
                    break 'main;
                }
            }
        }

        app.dispatch(Event::Frame(start.elapsed()));

        draw(&mut stdout, &app, &mut canvas).context("Failed to draw frame")?;

        let time_left = FRAMETIME.saturating_sub(t.elapsed());
        thread::sleep(time_left);
    }

    info!(
        generation = app.world().generation(),
        population = app.world().population(),
        "exiting"
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_logging(&config)?;
    info!(?config, "starting");

    let _guard = TerminalGuard::enter().context("Failed to set up terminal")?;

    run(&config)
}
