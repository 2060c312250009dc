use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "morphcam", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the morph camera once and print the pose as JSON.
    Eval(EvalArgs),
    /// Bake the morph camera over a frame range into a JSON track.
    Bake(BakeArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input rig JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the morph value (clamped to the waypoint range).
    #[arg(long)]
    morph: Option<f64>,

    /// Override the arc control (clamped to [-1, 1]).
    #[arg(long)]
    arc: Option<f64>,

    /// Move the timeline to this frame first, applying the rig's driver.
    #[arg(long, allow_negative_numbers = true)]
    frame: Option<i64>,
}

#[derive(Parser, Debug)]
struct BakeArgs {
    /// Input rig JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output track JSON path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (defaults to the rig's frame range).
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Last frame, inclusive (defaults to the rig's frame range).
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i64>,

    /// Override the arc control (clamped to [-1, 1]).
    #[arg(long)]
    arc: Option<f64>,

    /// Keep raw Euler angles instead of unwrapping them across frames.
    #[arg(long)]
    no_unwrap: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Bake(args) => cmd_bake(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_rig(path: &Path) -> anyhow::Result<morphcam::RigFile> {
    morphcam::RigFile::load(path).with_context(|| format!("load rig '{}'", path.display()))
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let rig = read_rig(&args.in_path)?;
    let mut cam = rig.morph_camera();
    let mut timeline = rig.timeline();

    if let Some(frame) = args.frame {
        cam.on_frame_change(morphcam::FrameIndex(frame), &mut timeline, &rig.scene)?;
    }
    if let Some(arc) = args.arc {
        cam.set_arc_control(arc, &rig.scene);
    }
    if let Some(morph) = args.morph {
        cam.set_morph_value(morph, &rig.scene);
    }

    let outcome = cam.update(&rig.scene);
    if outcome == morphcam::UpdateOutcome::NoOp {
        anyhow::bail!(
            "nothing to evaluate: {} waypoint(s), need two resolvable neighbours",
            cam.list().len()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, cam.pose()).context("write pose JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_bake(args: BakeArgs) -> anyhow::Result<()> {
    let rig = read_rig(&args.in_path)?;
    let mut cam = rig.morph_camera();
    let mut timeline = rig.timeline();

    if let Some(arc) = args.arc {
        cam.set_arc_control(arc, &rig.scene);
    }

    let range = rig.frame_range();
    let start = morphcam::FrameIndex(args.start.unwrap_or(range.start.0));
    let end = morphcam::FrameIndex(args.end.unwrap_or(range.end.0));
    let options = morphcam::BakeOptions {
        unwrap_euler: !args.no_unwrap,
    };

    let track = cam.bake(start, end, &mut timeline, &rig.scene, options)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create track '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &track)
        .with_context(|| format!("write track '{}'", args.out.display()))?;
    w.flush()?;

    if !track.skipped.is_empty() {
        eprintln!("skipped {} frame(s) with no resolvable pose", track.skipped.len());
    }
    eprintln!("wrote {} ({} keyframes)", args.out.display(), track.len());
    Ok(())
}
