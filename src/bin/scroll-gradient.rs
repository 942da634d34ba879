use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use scroll_gradient::{
    DEFAULT_CSS_ANGLE_DEG, GradientConfig, ScrollEvent, ScrollGradientInterpolator, Section,
};

const MAX_SWEEP_STEPS: f64 = 1_000_000.0;

#[derive(Parser, Debug)]
#[command(name = "scroll-gradient", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the background gradient for one scroll position.
    Sample(SampleArgs),
    /// Print the background gradient across a range of scroll positions.
    Sweep(SweepArgs),
    /// Validate a section table and print diagnostics.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Section table JSON.
    #[arg(long)]
    config: PathBuf,

    /// Scroll offset of the viewport's leading edge.
    #[arg(long, allow_negative_numbers = true)]
    offset: f64,

    /// Viewport extent; the sampling point is offset + viewport / 2.
    #[arg(long, default_value_t = 0.0)]
    viewport: f64,

    /// Print a CSS linear-gradient instead of JSON.
    #[arg(long)]
    css: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Section table JSON.
    #[arg(long)]
    config: PathBuf,

    /// First scroll offset.
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    to: f64,

    /// Distance between samples (> 0).
    #[arg(long)]
    step: f64,

    /// Viewport extent; the sampling point is offset + viewport / 2.
    #[arg(long, default_value_t = 0.0)]
    viewport: f64,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Section table JSON.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_config(path: &Path) -> anyhow::Result<GradientConfig> {
    GradientConfig::from_path(path).with_context(|| format!("load config '{}'", path.display()))
}

fn load_interpolator(path: &Path) -> anyhow::Result<ScrollGradientInterpolator> {
    let sections = read_config(path)?
        .resolve()
        .with_context(|| format!("resolve sections in '{}'", path.display()))?;
    tracing::info!(sections = sections.len(), "loaded section table");
    Ok(ScrollGradientInterpolator::new(sections)?)
}

fn section_id(sections: &[Section], idx: usize) -> &str {
    sections.get(idx).map_or("-", |s| s.id.as_str())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let interp = load_interpolator(&args.config)?;
    let midpoint = ScrollEvent::new(args.offset, args.viewport).midpoint();
    let gradient = interp.sample(midpoint);

    if args.css {
        println!("{}", gradient.to_css_linear(DEFAULT_CSS_ANGLE_DEG));
        return Ok(());
    }

    let bracket = interp.bracket(midpoint);
    let out = serde_json::json!({
        "midpoint": midpoint,
        "from": bracket.map(|b| section_id(interp.sections(), b.from)),
        "to": bracket.map(|b| section_id(interp.sections(), b.to)),
        "t": bracket.map(|b| b.t),
        "gradient": gradient,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("--step must be a finite number > 0");
    }
    if !(args.from.is_finite() && args.to.is_finite()) || args.to < args.from {
        anyhow::bail!("--from and --to must be finite with from <= to");
    }
    let steps = ((args.to - args.from) / args.step).floor();
    if steps > MAX_SWEEP_STEPS {
        anyhow::bail!("sweep would produce more than {MAX_SWEEP_STEPS} samples");
    }

    let interp = load_interpolator(&args.config)?;
    let sections = interp.sections();
    for k in 0..=(steps as u64) {
        let offset = args.from + (k as f64) * args.step;
        let midpoint = ScrollEvent::new(offset, args.viewport).midpoint();
        let [a, b, c] = interp.sample(midpoint).0;
        let (pair, t) = match interp.bracket(midpoint) {
            Some(br) => (
                format!(
                    "{}->{}",
                    section_id(sections, br.from),
                    section_id(sections, br.to)
                ),
                br.t,
            ),
            None => ("default".to_owned(), 0.0),
        };
        println!("{offset:>10.1} {midpoint:>10.1} {pair:<24} t={t:.3} {a} {b} {c}");
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    for d in cfg.diagnostics() {
        println!("warning: {d}");
    }
    let sections = cfg
        .resolve()
        .with_context(|| format!("invalid section table '{}'", args.config.display()))?;
    println!("ok: {} sections", sections.len());
    Ok(())
}
