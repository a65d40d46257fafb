mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use livemark_config::{Config, OutputFormat};
use livemark_engine::{ParseOptions, parse_str, parsing::snapshot, render};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{env, io::stdout, path::PathBuf, process};

/// What to do with the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Print the parse in the given format and exit.
    Print(Option<OutputFormat>),
    /// Open the live-preview editor.
    Edit,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    mode: Mode,
    full: bool,
    path: PathBuf,
}

const USAGE: &str = "[--tokens | --html | --print] [--full] <file>";

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut mode = Mode::Edit;
    let mut full = false;
    let mut path = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tokens" => mode = Mode::Print(Some(OutputFormat::Tokens)),
            "--html" => mode = Mode::Print(Some(OutputFormat::Html)),
            "--print" => mode = Mode::Print(None),
            "--full" => full = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {flag}")),
            file if path.is_none() => path = Some(PathBuf::from(file)),
            extra => return Err(format!("Unexpected argument: {extra}")),
        }
    }

    let path = path.ok_or_else(|| "No input file given".to_string())?;
    Ok(Args { mode, full, path })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("livemark-cli", String::as_str);
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let mut options: ParseOptions = config.parser.clone();
    if args.full {
        options.live_preview = false;
    }

    let text = match std::fs::read_to_string(&args.path) {
        Ok(text) => text,
        // A new file starts empty in the editor
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && args.mode == Mode::Edit => {
            String::new()
        }
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {e}", args.path.display());
            process::exit(1);
        }
    };

    match args.mode {
        Mode::Print(format) => {
            let doc = parse_str(&text, &options);
            match format.unwrap_or(config.output.format) {
                OutputFormat::Tokens => print!("{}", snapshot::normalize(&doc.tokens)),
                OutputFormat::Html => print!("{}", render::to_html(&doc.tokens)),
            }
            Ok(())
        }
        Mode::Edit => run_editor(App::new(args.path, &text, options)),
    }
}

fn run_editor(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.is_modified() {
        log::info!("Quit with unsaved changes to {}", app.title());
    }
    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Ok(()),
            KeyCode::F(2) => app.toggle_live_preview(),
            KeyCode::Char('s') if ctrl => {
                if let Err(e) = app.save() {
                    app.status = e.to_string();
                }
            }
            KeyCode::Char(c) if !ctrl => app.insert_char(c)?,
            KeyCode::Enter => app.insert_char('\n')?,
            KeyCode::Tab => app.insert_char('\t')?,
            KeyCode::Backspace => app.backspace()?,
            KeyCode::Delete => app.delete_forward()?,
            KeyCode::Left => app.move_left(),
            KeyCode::Right => app.move_right(),
            KeyCode::Up => app.move_up(),
            KeyCode::Down => app.move_down(),
            KeyCode::Home => app.move_home(),
            KeyCode::End => app.move_end(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Result<Args, String> {
        let list: Vec<String> = std::iter::once("livemark-cli")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        parse_args(&list)
    }

    #[test]
    fn file_alone_opens_editor() {
        assert_eq!(
            args(&["notes.md"]),
            Ok(Args {
                mode: Mode::Edit,
                full: false,
                path: PathBuf::from("notes.md"),
            })
        );
    }

    #[test]
    fn print_flags() {
        let parsed = args(&["--html", "--full", "a.md"]).unwrap();
        assert_eq!(parsed.mode, Mode::Print(Some(OutputFormat::Html)));
        assert!(parsed.full);
        assert_eq!(args(&["a.md", "--tokens"]).unwrap().mode, Mode::Print(Some(OutputFormat::Tokens)));
        assert_eq!(args(&["--print", "a.md"]).unwrap().mode, Mode::Print(None));
    }

    #[test]
    fn bad_arguments() {
        assert!(args(&[]).is_err());
        assert!(args(&["--bogus", "a.md"]).is_err());
        assert!(args(&["a.md", "b.md"]).is_err());
    }
}
