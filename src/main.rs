use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;
use std::rc::Rc;

use belltray::config::{self, ConfigResult};
use belltray::dropdown::{DropdownView, EMPTY_PLACEHOLDER};
use belltray::navigator::{RouteNavigator, Routes};
use belltray::notification::NotificationKind;
use belltray::{App, JsonFileStore, NotificationStore};

/// Terminal notification inbox
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal notification inbox with a dropdown, unread badge and campaign links"
)]
struct Args {
    /// Notification file (JSON array); overrides store.path from the config
    store: Option<PathBuf>,

    /// Print the notifications as plain text and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/belltray-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/belltray-debug.log")
            .expect("Failed to open /tmp/belltray-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== BELLTRAY DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();

    let args = Args::parse();

    let store_path = args
        .store
        .or_else(|| config_result.config.store.path.clone())
        .unwrap_or_else(config::default_store_path);

    // Fail before touching the terminal so the error stays readable
    let store = JsonFileStore::open(&store_path).wrap_err_with(|| {
        format!(
            "Failed to open notification store {}",
            store_path.display()
        )
    })?;

    if args.list {
        print_list(&store, &Routes::from_config(&config_result.config.routes));
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;

    let terminal = init_terminal()?;
    let app = App::new(
        Rc::new(store),
        Rc::new(RouteNavigator::new()),
        &config_result.config,
    );
    let result = run(terminal, app, &runtime, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== BELLTRAY DEBUG SESSION ENDED ===");

    Ok(())
}

/// Plain-text snapshot for `--list`
fn print_list(store: &JsonFileStore, routes: &Routes) {
    let notifications = store.notifications();
    let view = DropdownView::build(&notifications, store.unread_count(), chrono::Utc::now());

    if view.is_empty() {
        println!("{}", EMPTY_PLACEHOLDER);
        return;
    }
    if let Some(summary) = &view.summary {
        println!("{}", summary);
    }

    for (row, notification) in view.rows.iter().zip(&notifications) {
        let marker = if row.unread { '*' } else { ' ' };
        match &notification.kind {
            NotificationKind::CampaignLinked { campaign_id } => println!(
                "{} {} ({}) -> {}",
                marker,
                row.title,
                row.age,
                routes.campaign_path(campaign_id)
            ),
            NotificationKind::Plain => println!("{} {} ({})", marker, row.title, row.age),
        }
    }
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App<JsonFileStore>,
    runtime: &tokio::runtime::Runtime,
    config_result: ConfigResult,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.toast.show_warning(&warning);
    }

    loop {
        // Let store tasks finish before drawing their results
        runtime.block_on(app.run_pending_tasks());
        app.poll_outcomes();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
