use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use meowbar_frames::{AnimationState, GenerateOpts, Style};

#[derive(Parser, Debug)]
#[command(
    name = "meowbar-frames",
    version,
    about = "Generate MeowBar cat sprite frames",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Log every frame written.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate every frame of a style (the default).
    Generate(GenerateArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the animation table of a style.
    List(ListArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output directory [env: MEOWBAR_FRAMES_DIR] [default: app/MeowBar/Resources/Frames]
    #[arg(long, conflicts_with = "home")]
    out: Option<PathBuf>,

    /// Write into $HOME/.meow-bar/frames.
    #[arg(long)]
    home: bool,

    /// Drawing style [env: MEOWBAR_FRAME_STYLE]
    #[arg(long, value_enum)]
    style: Option<StyleChoice>,

    /// Render on one thread.
    #[arg(long, conflicts_with = "threads")]
    serial: bool,

    /// Worker threads for parallel rendering.
    #[arg(long)]
    threads: Option<usize>,

    /// Skip writing frames.json.
    #[arg(long)]
    no_manifest: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Animation state.
    #[arg(long, value_enum)]
    state: StateChoice,

    /// Phase index (0-based).
    #[arg(long)]
    phase: u8,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum)]
    style: Option<StyleChoice>,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, value_enum)]
    style: Option<StyleChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Pixel,
    LineArt,
}

impl From<StyleChoice> for Style {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Pixel => Style::Pixel,
            StyleChoice::LineArt => Style::LineArt,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StateChoice {
    Idle,
    Starting,
    Thinking,
    Working,
    Error,
    Complete,
    Ending,
    Compacting,
    Waiting,
}

impl From<StateChoice> for AnimationState {
    fn from(choice: StateChoice) -> Self {
        match choice {
            StateChoice::Idle => AnimationState::Idle,
            StateChoice::Starting => AnimationState::Starting,
            StateChoice::Thinking => AnimationState::Thinking,
            StateChoice::Working => AnimationState::Working,
            StateChoice::Error => AnimationState::Error,
            StateChoice::Complete => AnimationState::Complete,
            StateChoice::Ending => AnimationState::Ending,
            StateChoice::Compacting => AnimationState::Compacting,
            StateChoice::Waiting => AnimationState::Waiting,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Some(Command::Generate(args)) => cmd_generate(args),
        Some(Command::Frame(args)) => cmd_frame(args),
        Some(Command::List(args)) => cmd_list(resolve_style(args.style)?),
        None => cmd_generate(cli.generate),
    }
}

/// A `--style` flag wins; the environment is consulted only without one.
fn resolve_style(flag: Option<StyleChoice>) -> anyhow::Result<Style> {
    match flag {
        Some(choice) => Ok(choice.into()),
        None => Ok(meowbar_frames::env_style()
            .context("read MEOWBAR_FRAME_STYLE")?
            .unwrap_or_default()),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let out_dir = if args.home {
        meowbar_frames::home_frames_dir()?
    } else if let Some(out) = args.out {
        out
    } else {
        meowbar_frames::env_out_dir().unwrap_or_else(|| GenerateOpts::default().out_dir)
    };
    let opts = GenerateOpts::default()
        .with_out_dir(out_dir)
        .with_style(resolve_style(args.style)?)
        .with_parallel(!args.serial)
        .with_threads(args.threads)
        .with_manifest(!args.no_manifest);

    let report = meowbar_frames::generate(&opts)
        .with_context(|| format!("generate frames into '{}'", opts.out_dir.display()))?;

    eprintln!(
        "wrote {} {} frames to {}",
        report.files.len(),
        report.style,
        report.out_dir.display()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let style = resolve_style(args.style)?;
    let canvas = meowbar_frames::render_single(style, args.state.into(), args.phase)?;
    let png = meowbar_frames::encode_png(&canvas)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png).with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_list(style: Style) -> anyhow::Result<()> {
    let px = style.grid().pixel_size();
    println!("{style} ({px}x{px})");
    for a in style.animations() {
        println!(
            "  {:<10} {:<10} {} frames  {} ms",
            a.state.as_str(),
            a.name,
            a.phases,
            a.interval_ms
        );
    }
    Ok(())
}
