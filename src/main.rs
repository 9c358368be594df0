use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use inkboard::export::{ExportedImage, save_png};
use inkboard::input::{InputEvent, Theme};
use inkboard::{Config, Sketchpad};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKBOARD_GIT_HASH"), ")"),
    about = "Freehand drawing surface with brush, eraser, undo and PNG export"
)]
struct Cli {
    /// JSON array of input events to replay ("-" reads stdin)
    #[arg(long, short = 'e', value_name = "FILE")]
    events: Option<PathBuf>,

    /// Directory exported PNGs are written to (overrides the config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Initial theme (light or dark)
    #[arg(long, short = 't', value_name = "THEME", value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Viewport size the canvas is fitted into, e.g. 1280x800
    #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
    viewport: Option<(f64, f64)>,

    /// Export once more after the replay, under this name
    #[arg(long, short = 'x', value_name = "NAME")]
    export: Option<String>,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value
        .parse()
        .map_err(|()| format!("unknown theme '{value}' (expected light or dark)"))
}

fn parse_viewport(value: &str) -> Result<(f64, f64), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| format!("invalid viewport dimension '{part}'"))
    };
    Ok((parse(width)?, parse(height)?))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let Some(events_path) = cli.events.as_deref() else {
        // No events: show usage
        println!("inkboard: Freehand drawing surface with brush, eraser, undo and PNG export");
        println!();
        println!("Usage:");
        println!("  inkboard --events <FILE>     Replay a JSON event script");
        println!("  inkboard --events -          Read the script from stdin");
        println!("  inkboard --init-config       Write ~/.config/inkboard/config.toml");
        println!("  inkboard --help              Show help");
        println!();
        println!("Event script example:");
        println!(r#"  [{{"type": "pointer-down", "contacts": [{{"x": 10, "y": 10}}]}},"#);
        println!(r#"   {{"type": "pointer-move", "contacts": [{{"x": 200, "y": 120}}]}},"#);
        println!(r#"   {{"type": "pointer-up"}},"#);
        println!(r#"   {{"type": "export", "file_name": "sketch"}}]"#);
        return Ok(());
    };

    let config = Config::load().context("Failed to load configuration")?;
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.save_directory());

    let events = read_events(events_path)?;
    log::info!("Replaying {} events", events.len());

    let mut pad = Sketchpad::from_config(&config).context("Failed to create drawing surface")?;
    if let Some(theme) = cli.theme {
        let input = pad.input_mut();
        input.theme = theme;
        input.needs_redraw = true;
    }
    if let Some((width, height)) = cli.viewport {
        pad.dispatch(InputEvent::Resize { width, height })?;
    }

    for event in events {
        let outcome = pad.dispatch(event)?;
        if let Some(image) = outcome.export {
            save(&image, &output_dir)?;
        }
    }

    if let Some(name) = cli.export.as_deref() {
        let image = pad.export(Some(name))?;
        save(&image, &output_dir)?;
    }

    log::info!(
        "Replay finished with {} strokes",
        pad.input().drawing.len()
    );
    Ok(())
}

fn read_events(path: &Path) -> Result<Vec<InputEvent>> {
    let source = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read events from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read events from {}", path.display()))?
    };

    serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse events from {}", path.display()))
}

fn save(image: &ExportedImage, directory: &Path) -> Result<()> {
    let path = save_png(&image.png_data, directory, &image.file_name)
        .with_context(|| format!("Failed to save {}", image.file_name))?;
    println!("{}", path.display());
    Ok(())
}
