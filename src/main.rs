use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quiz_wiz::{draw_app, logger, App, OpenTdbClient, QuestionBank, Settings};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let settings = Settings::from_env();
    logger::init(&settings.log_path);
    logger::log(&format!("Starting quiz-wiz against {}", settings.api_url));

    let bank: Arc<dyn QuestionBank> = Arc::new(OpenTdbClient::new(settings.api_url.clone()));
    let categories = load_categories(bank.as_ref());
    let mut app = App::new(bank, categories);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exited with error: {}", e));
    }
    result
}

fn load_categories(bank: &dyn QuestionBank) -> Vec<quiz_wiz::Choice> {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            logger::log(&format!("Could not start runtime for categories: {}", e));
            return Vec::new();
        }
    };
    match rt.block_on(bank.categories()) {
        Ok(categories) => {
            logger::log(&format!("Loaded {} categories", categories.len()));
            categories
        }
        Err(e) => {
            logger::log(&format!("Category list unavailable: {}", e));
            Vec::new()
        }
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut tick: usize = 0;

    while !app.should_quit {
        app.tick();
        terminal.draw(|f| draw_app(f, app, tick))?;
        app.frame_drawn();

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key)?;
            }
        } else {
            tick = tick.wrapping_add(1);
        }
    }

    Ok(())
}
