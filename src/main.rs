use pawswipe::app::{App, AppMessage};
use pawswipe::cli::{parse_args, run_cli_command, USAGE};
use pawswipe::config::AppConfig;
use pawswipe::error::PawError;
use pawswipe::terminal::{setup_panic_hook, TerminalManager};
use pawswipe::{logging, ui};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Handle informational flags before any initialization
    let command = parse_args(std::env::args()).map_err(|e| eyre!("{}\n\n{}", e, USAGE))?;
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = AppConfig::from_env()
        .and_then(|config| options.apply(config))
        .map_err(|e| PawError::from(e).into_report())?;

    // Logging is optional; the TUI runs without it
    let log_path = logging::init().ok();

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new().map_err(|e| PawError::from(e).into_report())?;
    let print_json = config.print_json;

    let (result, summary) = runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let mut app = App::new(config);
        app.start_session();

        let result = run_app(manager.terminal(), &mut app).await;
        app.shutdown().await;
        manager.restore()?;

        Ok::<_, color_eyre::Report>((result, app.session.summary()))
    })?;

    if print_json {
        if let Some(summary) = summary {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    if let (Err(_), Some(path)) = (&result, log_path) {
        eprintln!("Log file: {}", path.display());
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard and mouse input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let tick = app.config.tick;

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick);

        tokio::select! {
            // Animation tick (spinner, exit transition)
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.mark_dirty();
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse(mouse);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            // Messages from the loader, timers and decoders
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
