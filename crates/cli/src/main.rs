use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use faceshape_core::landmarks::infrastructure::json_landmark_reader::JsonLandmarkReader;
use faceshape_core::overlay::domain::annotation_sink::AnnotationSink;
use faceshape_core::overlay::domain::face_annotation::DrawOptions;
use faceshape_core::overlay::infrastructure::json_annotation_sink::JsonAnnotationSink;
use faceshape_core::overlay::infrastructure::text_annotation_sink::TextAnnotationSink;
use faceshape_core::pipeline::analyze_faces_use_case::AnalyzeFacesUseCase;
use faceshape_core::pipeline::pipeline_logger::{
    NullPipelineLogger, PipelineLogger, StdoutPipelineLogger,
};
use faceshape_core::shared::constants::DEFAULT_FRAME_INTERVAL_MS;

/// Classify face shapes from recorded 68-point landmark detections.
#[derive(Parser)]
#[command(name = "faceshape")]
struct Cli {
    /// JSON file of recorded detections (array of frames with faces and landmarks).
    input: PathBuf,

    /// Write annotations to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format: text or json.
    #[arg(long, default_value = "text")]
    format: String,

    /// Delay between frames in milliseconds (0 = no delay).
    #[arg(long, default_value = "0")]
    interval_ms: u64,

    /// Pace frames like the live detector loop (overrides --interval-ms).
    #[arg(long)]
    realtime: bool,

    /// Log progress every N frames.
    #[arg(long, default_value = "10")]
    progress_every: usize,

    /// Suppress progress and summary logging.
    #[arg(long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let source = JsonLandmarkReader::open(&cli.input)?;
    let sink = build_sink(&cli)?;
    let logger: Box<dyn PipelineLogger> = if cli.quiet {
        Box::new(NullPipelineLogger)
    } else {
        Box::new(StdoutPipelineLogger::new(cli.progress_every))
    };

    let mut use_case = AnalyzeFacesUseCase::new(
        Box::new(source),
        sink,
        logger,
        DrawOptions::default(),
        frame_interval(&cli),
    );
    let summary = use_case.execute()?;

    if let Some(output) = &cli.output {
        log::info!(
            "Wrote {} annotations to {}",
            summary.faces,
            output.display()
        );
    }
    Ok(())
}

fn build_sink(cli: &Cli) -> Result<Box<dyn AnnotationSink>, Box<dyn std::error::Error>> {
    let out: Box<dyn io::Write + Send> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };
    Ok(if cli.format == "json" {
        Box::new(JsonAnnotationSink::new(out))
    } else {
        Box::new(TextAnnotationSink::new(out))
    })
}

fn frame_interval(cli: &Cli) -> Option<Duration> {
    let ms = if cli.realtime {
        DEFAULT_FRAME_INTERVAL_MS
    } else {
        cli.interval_ms
    };
    (ms > 0).then(|| Duration::from_millis(ms))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.format != "text" && cli.format != "json" {
        return Err(format!("Format must be 'text' or 'json', got '{}'", cli.format).into());
    }
    if cli.progress_every == 0 {
        return Err("Progress interval must be at least 1 frame".into());
    }
    if let Some(output) = &cli.output {
        if output == &cli.input {
            return Err("Output file must differ from the input file".into());
        }
    }
    Ok(())
}
