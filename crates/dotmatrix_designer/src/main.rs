#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::missing_errors_doc)]

mod options;
mod render_command;
mod shell;

pub use options::*;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotmatrix_edit::EditorController;
use dotmatrix_engine::{Color, Marker};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use semver::Version;

lazy_static::lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
}

pub type DesignerResult<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(version, about = "Design and render dot-matrix character sets", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Design characters interactively, reading commands from stdin
    Edit {
        /// Character set file, created on the first save
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Glyph rows
        #[clap(long)]
        rows: Option<usize>,

        /// Glyph columns
        #[clap(long)]
        columns: Option<usize>,
    },

    /// Render a string with a character set
    Render {
        /// Character set file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Text to render
        #[arg(value_name = "TEXT")]
        text: String,

        /// Integer scale factor
        #[clap(long)]
        scale: Option<u32>,

        /// Dot shape: circle or rectangle
        #[clap(long)]
        marker: Option<Marker>,

        /// Foreground color (#rrggbb)
        #[clap(long)]
        fg: Option<Color>,

        /// Background color (#rrggbb)
        #[clap(long)]
        bg: Option<Color>,

        /// Write a PNG instead of printing a preview
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

fn get_log_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", "dotmatrix_designer") {
        let dir = proj_dirs.config_dir().to_path_buf();
        if !dir.exists() {
            std::fs::create_dir_all(&dir).ok()?;
        }
        return Some(dir);
    }
    None
}

fn main() {
    let args = Args::parse();

    // keep the handle alive, dropping it stops the logger
    let logger = get_log_dir().and_then(|log_dir| {
        Logger::try_with_env_or_str("info")
            .ok()?
            .log_to_file(FileSpec::default().directory(&log_dir).basename("dotmatrix_designer").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
            .ok()
    });
    if logger.is_none() {
        eprintln!("Failed to create log file");
    }

    log::info!("Starting dotmatrix_designer {}", *VERSION);

    if let Err(err) = run(args) {
        log::error!("{err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    log::info!("Shutting down.");
}

fn run(args: Args) -> DesignerResult<()> {
    let mut options = Options::load_options().unwrap_or_else(|err| {
        log::warn!("Failed to load options, using defaults: {err}");
        Options::default()
    });

    match args.command {
        Command::Edit { path, rows, columns } => {
            let path = options.charset_path(path);
            let rows = rows.unwrap_or(options.rows);
            let columns = columns.unwrap_or(options.columns);

            let mut controller = EditorController::open_or_create(&path, rows, columns)?;
            shell::run_shell(&mut controller, std::io::stdin().lock(), std::io::stdout().lock())?;

            options.last_charset = Some(path);
            if let Err(err) = options.store_options() {
                log::warn!("Failed to store options: {err}");
            }
        }
        Command::Render {
            path,
            text,
            scale,
            marker,
            fg,
            bg,
            output,
        } => {
            let mut render_options = options.render;
            render_options.scale_factor = scale.unwrap_or(render_options.scale_factor);
            render_options.marker = marker.unwrap_or(render_options.marker);
            render_options.foreground = fg.unwrap_or(render_options.foreground);
            render_options.background = bg.unwrap_or(render_options.background);

            let result = render_command::render_text(&path, &text, &render_options, output.as_deref())?;
            println!("{result}");
        }
    }
    Ok(())
}
