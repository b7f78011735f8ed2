//! Admin TUI entry point
//!
//! Terminal setup, the render/event loop, and startup session restore live
//! here. Everything else is dispatched through the handlers.

use std::io;
use std::sync::atomic::Ordering;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use admintui::api::CmsClient;
use admintui::app::App;
use admintui::config::Config;
use admintui::handlers;
use admintui::model::Model;
use admintui::resources::Resource;
use admintui::services::api::{spawn_api_service, ApiRequest};
use admintui::session::Session;
use admintui::{log_debug, ui, DEBUG_MODE};

/// CMS Admin TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let mut config = Config::load(args.config.as_deref())?;
    if args.vim {
        config.vim_mode = true;
    }

    let client = CmsClient::new(config.base_url.clone());
    let (api_tx, api_rx) = spawn_api_service(client.clone());

    let mut session = Session::new(config.token_path());
    if let Some(token) = session.load_persisted_token() {
        // Validate the persisted token before trusting it
        client.set_token(Some(token));
        let _ = api_tx.send(ApiRequest::GetCurrentUser);
    } else {
        session.resolve(None);
    }

    let model = Model::new(Resource::Appliances, config.page_size, config.vim_mode);
    let export_dir = std::env::current_dir()?;
    let mut app = App::new(model, session, client, api_tx, api_rx, export_dir);

    let mut guard = TerminalGuard::acquire()?;
    run_app(&mut guard.terminal, &mut app)
}

/// Owns the raw-mode alternate screen; restores the terminal on drop so a
/// panic or early error cannot leave the shell unusable.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::api::apply(app, response);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key);
            }
        }
    }

    Ok(())
}
