use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use thumbforge::{BackgroundSource, Compositor, ThumbnailDocument, mirror_to_preview};

#[derive(Parser, Debug)]
#[command(name = "thumbforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a thumbnail document to a PNG.
    Render(RenderArgs),
    /// Print the preview-card metadata for a title.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input document JSON. Flags below override its fields.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Title text.
    #[arg(long)]
    title: Option<String>,

    /// Subtitle text.
    #[arg(long)]
    subtitle: Option<String>,

    /// Title font size in px (40-120).
    #[arg(long)]
    title_size: Option<u32>,

    /// Subtitle font size in px (20-60).
    #[arg(long)]
    subtitle_size: Option<u32>,

    /// Background image file. Omit for the gradient fallback.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Font file (ttf/otf) used for title and subtitle glyphs.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output directory for the exported PNG (fixed filename).
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Title text.
    #[arg(long)]
    title: String,

    /// Channel display name.
    #[arg(long, default_value = "Your Channel")]
    channel: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn read_doc_json(path: &Path) -> anyhow::Result<ThumbnailDocument> {
    let f = File::open(path).with_context(|| format!("open document '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: ThumbnailDocument =
        serde_json::from_reader(r).with_context(|| "parse document JSON")?;
    Ok(doc)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut doc = match &args.in_path {
        Some(p) => read_doc_json(p)?,
        None => ThumbnailDocument::new(),
    };

    if let Some(title) = args.title {
        doc.set_title(title);
    }
    if let Some(subtitle) = args.subtitle {
        doc.set_subtitle(subtitle);
    }
    if let Some(size) = args.title_size {
        doc.set_title_size_px(size);
    }
    if let Some(size) = args.subtitle_size {
        doc.set_subtitle_size_px(size);
    }
    if let Some(bg) = &args.background {
        let bytes = std::fs::read(bg)
            .with_context(|| format!("read background '{}'", bg.display()))?;
        doc.set_background(Some(BackgroundSource::from_bytes(bytes)));
    }

    let mut compositor = Compositor::new();
    if let Some(font) = &args.font {
        let bytes =
            std::fs::read(font).with_context(|| format!("read font '{}'", font.display()))?;
        compositor.register_font(&bytes)?;
    } else if !doc.title.is_empty() || !doc.subtitle.is_empty() {
        anyhow::bail!("--font is required when the document has title or subtitle text");
    }

    let surface = compositor.render(&doc)?;
    let path = thumbforge::export_to_file(&surface, &args.out_dir)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let mut compositor = Compositor::new();
    let surface = compositor.render(&ThumbnailDocument::new())?;
    let card = mirror_to_preview(&surface, &args.title, &args.channel);

    println!("{}", card.display_title);
    println!("{}", card.length_label());
    println!("[{}] {} • {}", card.channel.initial, card.channel.name, card.channel.posted_label);
    Ok(())
}
