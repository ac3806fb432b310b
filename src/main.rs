use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use typeahead::TypeaheadError;
use typeahead::app::{App, OutputMode};
use typeahead::config::{Config, load_config};
use typeahead::input::{OptionReader, OptionSource, spawn_loader};
use typeahead::select::{SelectSettings, Variant, named_colors};

/// Exit status when the user aborts with Ctrl+C
const ABORT_EXIT_CODE: u8 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One value per line
    Plain,
    /// {"selected": [...], "created": [...]}
    Json,
}

/// Interactive typeahead picker with creatable options
#[derive(Parser, Debug)]
#[command(name = "typeahead", version, about, long_about = None)]
struct Args {
    /// Options to pick from (read from --file or stdin when omitted)
    options: Vec<String>,

    /// Picker variant: default, accented-single, accented-multi, palette
    #[arg(long, value_name = "VARIANT")]
    variant: Option<Variant>,

    /// Do not offer to create values that are not in the list
    #[arg(long)]
    no_create: bool,

    /// Label of the create row
    #[arg(long, value_name = "LABEL")]
    create_label: Option<String>,

    /// Placeholder shown while nothing is selected
    #[arg(long, value_name = "TEXT")]
    placeholder: Option<String>,

    /// Maximum number of selected values (multi-select)
    #[arg(long, value_name = "N")]
    max: Option<usize>,

    /// Initially selected value (repeat for multi-select)
    #[arg(long = "value", value_name = "VALUE")]
    values: Vec<String>,

    /// Refuse to finish while nothing is selected
    #[arg(long)]
    required: bool,

    /// Show the picker read-only
    #[arg(long)]
    disabled: bool,

    /// Read options from a file (one per line, or a JSON array)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Reload the file when it changes, polling every MS milliseconds
    #[arg(
        long,
        value_name = "MS",
        requires = "file",
        value_parser = clap::value_parser!(u64).range(1..),
        num_args = 0..=1,
        default_missing_value = "1000"
    )]
    watch: Option<u64>,

    /// Output format of the final selection
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Print the palette color table and exit
    #[arg(long)]
    list_colors: bool,

    /// Path to config file (default: ~/.config/typeahead/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_debug_logger();

    let args = Args::parse();

    if args.list_colors {
        for (name, token) in named_colors() {
            println!("{:<10}{}", name, token.hex());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config_result = load_config(args.config.as_deref());
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }

    let source = option_source(&args)?;
    let mut app = build_app(&args, &config_result.config, &source)?;
    if !source.is_inline() {
        let watch = args.watch.map(Duration::from_millis);
        app = app.with_loader(spawn_loader(source, watch));
    }
    app.status = config_result.warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result?;

    match app.output_mode() {
        Some(OutputMode::Finish) => {
            print_selection(&app, args.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(OutputMode::Abort) | None => Ok(ExitCode::from(ABORT_EXIT_CODE)),
    }
}

/// Positional options win, then --file, then piped stdin
fn option_source(args: &Args) -> Result<OptionSource, TypeaheadError> {
    if !args.options.is_empty() {
        return Ok(OptionSource::Args(args.options.clone()));
    }
    if let Some(path) = &args.file {
        return Ok(OptionSource::File(path.clone()));
    }
    if !io::stdin().is_terminal() {
        return Ok(OptionSource::Stdin);
    }
    Err(TypeaheadError::EmptyCatalog)
}

fn build_app(args: &Args, config: &Config, source: &OptionSource) -> Result<App, TypeaheadError> {
    let settings = SelectSettings {
        placeholder: args
            .placeholder
            .clone()
            .unwrap_or_else(|| config.picker.placeholder.clone()),
        create_label: args
            .create_label
            .clone()
            .unwrap_or_else(|| config.picker.create_label.clone()),
        allow_create: config.picker.allow_create && !args.no_create,
        required: args.required,
        disabled: args.disabled,
        max_selected: args.max,
    };
    let variant: Variant = args.variant.unwrap_or(config.picker.variant);

    let options = if source.is_inline() {
        OptionReader::read(source)?
    } else {
        Vec::new()
    };

    log::info!(
        "starting {} picker with {} options",
        variant,
        options.len()
    );
    Ok(App::new(variant, options, args.values.clone(), settings, config))
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn print_selection(app: &App, format: OutputFormat) -> Result<()> {
    let selection = app.selection();
    match format {
        OutputFormat::Plain => {
            for value in &selection.selected {
                println!("{}", value);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&selection)?),
    }
    Ok(())
}

/// File logger for development; the terminal belongs to the TUI
#[cfg(debug_assertions)]
fn init_debug_logger() {
    use std::fs::OpenOptions;
    use std::io::Write;

    let path = std::env::temp_dir().join("typeahead-debug.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
