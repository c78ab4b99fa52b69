use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use starfield::{
    Animator, CpuSurface, FrameRgba, RECENT_LIMIT, SceneConfig, StarShape, load_articles,
    recent_articles,
};

#[derive(Parser, Debug)]
#[command(name = "starfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of the starfield as a PNG.
    Frame(FrameArgs),
    /// Render a run of consecutive frames as numbered PNGs.
    Sequence(SequenceArgs),
    /// Print the most recent articles from a news feed JSON file.
    News(NewsArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene config JSON; defaults apply for anything not set.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the logical viewport width.
    #[arg(long)]
    width: Option<f64>,

    /// Override the logical viewport height.
    #[arg(long)]
    height: Option<f64>,

    /// Override the number of stars.
    #[arg(long)]
    stars: Option<usize>,

    /// Seed the field for a reproducible render.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the star shape.
    #[arg(long, value_enum)]
    shape: Option<ShapeChoice>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// How many frames to advance before capturing.
    #[arg(long, default_value_t = 1)]
    ticks: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// Output directory for frame_NNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct NewsArgs {
    /// News feed JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// How many articles to print.
    #[arg(long, default_value_t = RECENT_LIMIT)]
    limit: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Disc,
    Spiked,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::News(args) => cmd_news(args),
    }
}

fn build_scene(args: &SceneArgs) -> anyhow::Result<SceneConfig> {
    let mut config = match &args.config {
        Some(path) => SceneConfig::from_json_file(path)?,
        None => SceneConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(stars) = args.stars {
        config.field.num_stars = stars;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(shape) = args.shape {
        config.shape = match shape {
            ShapeChoice::Disc => StarShape::Disc,
            ShapeChoice::Spiked => StarShape::default(),
        };
    }

    config.validate()?;
    Ok(config)
}

fn make_animator(config: SceneConfig) -> anyhow::Result<Animator<CpuSurface>> {
    let surface = CpuSurface::new(config.viewport()?)?;
    Ok(Animator::new(config, surface)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = build_scene(&args.scene)?;
    let mut animator = make_animator(config)?;

    let ticks = args.ticks.max(1);
    for _ in 0..ticks {
        animator.advance_frame()?;
    }

    write_png(&args.out, &animator.surface().to_frame())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("sequence needs --frames >= 1");
    }

    let config = build_scene(&args.scene)?;
    let mut animator = make_animator(config)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..args.frames {
        animator.advance_frame()?;
        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&out, &animator.surface().to_frame())?;
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn cmd_news(args: NewsArgs) -> anyhow::Result<()> {
    let articles = load_articles(&args.in_path)?;
    let recent = recent_articles(&articles, args.limit);

    if recent.is_empty() {
        eprintln!("no articles in {}", args.in_path.display());
        return Ok(());
    }

    for article in recent {
        let date = article
            .published_at()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| article.date_published.clone());
        println!("{}", article.title);
        println!("  By {} on {}", article.author, date);
        println!("  {}", article.teaser());
        println!();
    }
    Ok(())
}

fn write_png(out: &std::path::Path, frame: &FrameRgba) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
