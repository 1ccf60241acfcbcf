use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "difbuild", version)]
struct Cli {
    /// Log build progress to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a scene document and write it as a `.dif` file.
    Build(BuildArgs),
    /// Print the stream fingerprint of a scene document without writing it.
    Fingerprint(SceneArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output layout.
    #[arg(long, value_enum, default_value_t = FormatChoice::Baseline)]
    format: FormatChoice,

    /// Build config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BuildArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output DIF path. A split scene writes `<stem>N.dif` next to it instead.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Baseline,
    Tge,
    Mbg,
}

impl From<FormatChoice> for dif_builder::Version {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Baseline | FormatChoice::Tge => Self::Baseline,
            FormatChoice::Mbg => Self::Mbg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<dif_builder::BuildConfig> {
    let Some(path) = path else {
        return Ok(dif_builder::BuildConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read build config '{}'", path.display()))?;
    dif_builder::BuildConfig::from_json_str(&text)
        .with_context(|| format!("load build config '{}'", path.display()))
}

fn read_scene_json(path: &Path) -> anyhow::Result<dif_builder::SceneDocument> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read scene '{}'", path.display()))?;
    dif_builder::SceneDocument::from_json_str(&text)
        .with_context(|| format!("parse scene '{}'", path.display()))
}

fn build_scenes(args: &SceneArgs) -> anyhow::Result<Vec<dif_builder::SceneGraph>> {
    let cfg = read_config(args.config.as_deref())?;
    let doc = read_scene_json(&args.in_path)?;
    let graphs = doc
        .build_split(&cfg)
        .with_context(|| format!("build scene '{}'", args.in_path.display()))?;
    Ok(graphs)
}

/// `out` itself for a single scene, `<stem>N.<ext>` per part otherwise.
fn part_path(out: &Path, index: usize, parts: usize) -> PathBuf {
    if parts == 1 {
        return out.to_path_buf();
    }
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = out
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dif".to_owned());
    out.with_file_name(format!("{stem}{index}.{ext}"))
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let graphs = build_scenes(&args.scene)?;
    let version = dif_builder::Version::from(args.scene.format);

    for (i, graph) in graphs.iter().enumerate() {
        let path = part_path(&args.out, i, graphs.len());
        dif_builder::write_scene_file(graph, version, &path)?;
        eprintln!(
            "wrote {} ({version}, {} interiors, {} pathed, {} triggers, {} entities)",
            path.display(),
            graph.interiors().len(),
            graph.pathed_interiors().len(),
            graph.triggers().len(),
            graph.game_entities().len(),
        );
    }
    Ok(())
}

fn cmd_fingerprint(args: SceneArgs) -> anyhow::Result<()> {
    let version = dif_builder::Version::from(args.format);
    for graph in build_scenes(&args)? {
        println!("{}", dif_builder::fingerprint_scene(&graph, version)?);
    }
    Ok(())
}
