use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use sidekick::{
    api::ApiClient,
    app::App,
    config,
    key_handlers::{self, KeyOutcome},
    logging, ui,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    config::initialize_config()?;
    let config = config::get_config();
    logging::init_logging(&config)?;

    let client = ApiClient::new(&config)?;
    log::info!("chat endpoint: {}", config.chat_url);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(), client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main loop: draw, drain settled replies, poll input. Each send runs as
/// one spawned task that posts its resolved text back over the channel;
/// when the loop exits the receiver is dropped and any late reply dies
/// with it instead of touching torn-down state.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: ApiClient,
) -> Result<()> {
    let (reply_tx, mut reply_rx) = mpsc::channel::<String>(8);

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        while let Ok(reply_text) = reply_rx.try_recv() {
            app.finish_send(reply_text);
        }

        app.status_indicator.update_spinner();

        if event::poll(Duration::from_millis(100))? {
            if let CEvent::Key(key) = event::read()? {
                match key_handlers::handle_key(key, &mut app) {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Dispatch(outbound) => {
                        let client = client.clone();
                        let reply_tx = reply_tx.clone();
                        tokio::spawn(async move {
                            let text = client
                                .resolve_reply(&outbound.message, outbound.lang)
                                .await;
                            let _ = reply_tx.send(text).await;
                        });
                    }
                    KeyOutcome::Continue => {}
                }
            }
        }
    }
}
