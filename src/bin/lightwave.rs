use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use lightwave::{
    Argb, Fps, FrameIndex, RedrawRequests, SkeletonContent, Size, Surface, WaveAttributes,
    WaveConfig, WaveView,
};

#[derive(Parser, Debug)]
#[command(name = "lightwave", version)]
struct Cli {
    /// Log animator and config transitions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Sequence(SequenceArgs),
    /// Print the resolved light wave config as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Style attributes JSON (an object of light wave options). Defaults to the alpha preset.
    #[arg(long)]
    attrs: Option<PathBuf>,

    /// View width in pixels.
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// View height in pixels.
    #[arg(long, default_value_t = 80)]
    height: u32,

    /// Background color behind the view (#RRGGBB or #AARRGGBB).
    #[arg(long, default_value = "#FFFFFFFF")]
    background: String,

    /// Placeholder block color (#RRGGBB or #AARRGGBB).
    #[arg(long, default_value = "#FFE0E0E0")]
    block: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Time since the animation started, in milliseconds.
    #[arg(long, default_value_t = 0)]
    time_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 30)]
    frames: u64,

    /// Output directory; frames are written as `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Style attributes JSON.
    #[arg(long)]
    attrs: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn read_attrs(path: Option<&Path>) -> anyhow::Result<WaveAttributes> {
    let Some(path) = path else {
        return Ok(WaveAttributes::new());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("open attributes '{}'", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| "parse attributes JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => anyhow::bail!("attributes '{}' must be a JSON object", path.display()),
    }
}

fn parse_color(s: &str) -> anyhow::Result<Argb> {
    Argb::parse_hex(s).map_err(|e| anyhow::anyhow!("invalid color '{s}': {e}"))
}

struct Stage {
    view: WaveView<SkeletonContent>,
    background: [u8; 4],
    width: u32,
    height: u32,
}

impl Stage {
    fn new(args: &ViewArgs) -> anyhow::Result<Self> {
        let attrs = read_attrs(args.attrs.as_deref())?;
        let config = WaveConfig::from_attributes(&attrs).context("build light wave config")?;
        let block = parse_color(&args.block)?;
        let background = parse_color(&args.background)?.to_premul().to_array();

        let content = SkeletonContent::list_item(
            Size::new(f64::from(args.width), f64::from(args.height)),
            block,
        );
        let mut view = WaveView::with_config(content, config)?;
        view.on_layout(args.width, args.height);
        view.on_attached(Box::new(RedrawRequests::new()));
        // Rendering offline: run even when the config asks for a manual start.
        view.start_light_wave();

        Ok(Self {
            view,
            background,
            width: args.width,
            height: args.height,
        })
    }

    fn render(&mut self) -> anyhow::Result<Surface> {
        let mut target = Surface::new(self.width, self.height)?;
        target.clear(self.background);
        self.view.dispatch_draw(&mut target)?;
        Ok(target)
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut stage = Stage::new(&args.view)?;
    stage.view.on_frame(Duration::from_millis(args.time_ms));
    let surface = stage.render()?;

    ensure_parent(&args.out)?;
    surface.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let fps = Fps::new(args.fps, 1)?;
    let mut stage = Stage::new(&args.view)?;
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut prev = Duration::ZERO;
    for i in 0..args.frames {
        let now = fps.frame_time(FrameIndex(i));
        stage.view.on_frame(now - prev);
        prev = now;

        let surface = stage.render()?;
        let path = args.out_dir.join(format!("frame_{i:05}.png"));
        surface.save_png(&path)?;
        tracing::debug!(
            frame = i,
            value = stage.view.engine().animated_value(),
            "frame rendered"
        );
    }
    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let attrs = read_attrs(args.attrs.as_deref())?;
    let config = WaveConfig::from_attributes(&attrs).context("build light wave config")?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
