use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "storyreveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scroll through a story in virtual time and print snapshots as JSON lines.
    Simulate(SimulateArgs),
    /// Print the ambient glyph frames at one instant as JSON.
    Glyphs(GlyphsArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input story script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Stop after this many virtual milliseconds.
    #[arg(long, default_value_t = 60_000)]
    until: u64,

    /// Snapshot interval in milliseconds.
    #[arg(long, default_value_t = 500)]
    step: u64,

    /// Scroll speed in pixels per second.
    #[arg(long, default_value_t = 150.0)]
    scroll_speed: f64,

    /// Viewport width.
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Only print the last snapshot.
    #[arg(long)]
    final_only: bool,

    /// Write output here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GlyphsArgs {
    /// Random seed for the glyph pool.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Instant to sample, in milliseconds.
    #[arg(long, default_value_t = 0)]
    at: u64,

    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Glyphs(args) => cmd_glyphs(args),
    }
}

fn read_script(path: &Path) -> anyhow::Result<storyreveal::StoryScript> {
    let f = File::open(path).with_context(|| format!("open story script '{}'", path.display()))?;
    let script = serde_json::from_reader(BufReader::new(f)).with_context(|| "parse story JSON")?;
    Ok(script)
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn std::io::Write>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.step > 0, "--step must be > 0");
    anyhow::ensure!(
        args.scroll_speed.is_finite() && args.scroll_speed >= 0.0,
        "--scroll-speed must be finite and non-negative"
    );

    let script = read_script(&args.in_path)?;
    let viewport = storyreveal::Viewport::new(args.width, args.height)?;
    let mut story = storyreveal::Story::from_script(script, viewport)?;
    story.mount_all();

    let max_scroll = (story.layout().document_height() - viewport.height).max(0.0);
    let mut out = open_output(args.out.as_deref())?;
    let mut frames = 0u64;
    let mut t = 0u64;
    loop {
        let scroll_y = (args.scroll_speed * t as f64 / 1000.0).min(max_scroll);
        story.scroll_to(scroll_y);
        story.advance_to(storyreveal::Millis(t));

        let last = t >= args.until;
        if !args.final_only || last {
            serde_json::to_writer(&mut out, &story.snapshot()).with_context(|| "write snapshot")?;
            out.write_all(b"\n")?;
            frames += 1;
        }
        if last {
            break;
        }
        t = t.saturating_add(args.step).min(args.until);
    }
    out.flush()?;

    eprintln!(
        "simulated {} ms, wrote {frames} snapshot(s), all complete: {}",
        args.until,
        story.all_complete()
    );
    Ok(())
}

fn cmd_glyphs(args: GlyphsArgs) -> anyhow::Result<()> {
    let viewport = storyreveal::Viewport::new(args.width, args.height)?;
    let layer =
        storyreveal::AmbientLayer::new(storyreveal::AmbientConfig::default(), viewport, args.seed)?;
    let frames = layer.sample(storyreveal::Millis(args.at));

    let mut out = open_output(None)?;
    serde_json::to_writer_pretty(&mut out, &frames).with_context(|| "write glyph frames")?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
