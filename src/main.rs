use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use scalemate::{
    parse_chord, parse_scale_spec, summarize, web, Config, Fretboard, FretboardOptions, Renderer,
};
use std::path::PathBuf;
use std::{env, fs, process};

/// Logging is controlled with RUST_LOG; see docs for the env_logger crate.
/// If RUST_LOG is not set, the log level defaults to Info.
#[derive(Parser)]
#[command(version, about, long_about = None, verbatim_doc_comment)]
struct Cli {
    /// YAML file with defaults for scale, tuning, frets and layout
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a scale (and optionally a chord) on the fretboard and save it as PNG
    Render {
        /// Scale to highlight, e.g. 'C major' or 'F# harmonic minor'
        #[arg(long)]
        scale: Option<String>,
        /// Chord to highlight, e.g. Amin7
        #[arg(long)]
        chord: Option<String>,
        /// Guitar/bass tuning, notes separated by a whitespace
        #[arg(long)]
        tuning: Option<String>,
        /// Number of frets on the neck
        #[arg(long)]
        frets: Option<u32>,
        /// Filename for saving the PNG
        #[arg(long, default_value = "scale.png")]
        file: PathBuf,
        /// Leave out the title above the neck
        #[arg(long)]
        no_title: bool,
    },
    /// Print the notes and diatonic seventh chords of a scale
    Info {
        #[arg(long)]
        scale: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Serve the GET /scale endpoint
    Serve {
        /// TCP address for the server to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        log_builder.filter_level(LevelFilter::Info);
    }
    log_builder.init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Render {
            scale,
            chord,
            tuning,
            frets,
            file,
            no_title,
        } => {
            let scale = parse_scale_spec(scale.as_deref().unwrap_or(&config.scale))?;
            let mut fretboard = Fretboard::new(FretboardOptions {
                tuning: Some(tuning.unwrap_or(config.tuning)),
                frets: Some(frets.unwrap_or(config.frets)),
            })?;
            fretboard.highlight_scale(scale);
            if let Some(chord) = chord.or(config.chord) {
                fretboard.highlight_chord(parse_chord(&chord)?);
            }

            let mut options = config.render;
            if no_title {
                options.draw_title = false;
            }
            let png = Renderer::new(&fretboard, options).render_png()?;
            fs::write(&file, png).with_context(|| format!("writing {}", file.display()))?;
            info!("wrote {} to {}", fretboard.title(), file.display());
            Ok(())
        }
        Commands::Info { scale, json } => {
            let scale = parse_scale_spec(scale.as_deref().unwrap_or(&config.scale))?;
            let summary = summarize(&scale)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let notes: Vec<String> = summary.notes.iter().map(|n| n.to_string()).collect();
                println!("{}", summary.name);
                println!("notes:  {}", notes.join(" "));
                println!("chords: {}", summary.chords.join(" "));
            }
            Ok(())
        }
        Commands::Serve { addr } => Ok(web::serve(&addr, &config.render)?),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("unable to generate scale: {e:#}");
        process::exit(1);
    }
}
