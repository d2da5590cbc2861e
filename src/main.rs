use plaza::adapters::{ApiClient, DevSession, SessionFileStore};
use plaza::app::{App, AppMessage};
use plaza::config::PlazaConfig;
use plaza::traits::{NotificationService, ProfileService, SessionStore};
use plaza::viewport;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Route tracing to a log file so the alternate screen stays clean.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let log_dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("plaza");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::File::create(log_dir.join("plaza.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plaza=debug")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = PlazaConfig::from_env();
    tracing::info!(api = %config.api_base_url, dev = config.dev_mode, "starting");

    let api = ApiClient::new(&config.api_base_url);

    // Session authority: persisted credentials, or an always-active session
    // in dev mode.
    let (session, token): (Arc<dyn SessionStore>, Option<String>) = if config.dev_mode {
        (Arc::new(DevSession), None)
    } else {
        let store = SessionFileStore::from_default_path()
            .ok_or_else(|| eyre!("no config directory available"))?
            .with_api(api.clone());
        let token = store.access_token();
        (Arc::new(store), token)
    };

    let authed_api = match token {
        Some(ref token) => api.with_auth(token),
        None => api,
    };
    let profile_service: Arc<dyn ProfileService> = Arc::new(authed_api.clone());
    let notification_service: Arc<dyn NotificationService> = Arc::new(authed_api.clone());

    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();
    let mut app = App::new(
        config.clone(),
        session,
        profile_service,
        tx.clone(),
        viewport::measure_width_px(),
    );

    // Fixed-interval notification polling; failures are logged and the next
    // tick tries again.
    let poll_tx = tx.clone();
    let poll_interval = config.poll_interval();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(poll_interval);
        loop {
            interval.tick().await;
            match notification_service.fetch_notification_count().await {
                Ok(count) => {
                    if poll_tx.send(AppMessage::NotificationCount(count)).is_err() {
                        break;
                    }
                }
                Err(err) => tracing::debug!(error = %err, "notification poll failed"),
            }
        }
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = run_loop(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    run_result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let mut events = EventStream::new();

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => {
                        app.handle_resize(viewport::measure_width_px());
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => tracing::warn!(error = %err, "terminal event error"),
                    None => break,
                }
            }
            Some(message) = rx.recv() => app.handle_message(message),
        }
    }

    Ok(())
}
