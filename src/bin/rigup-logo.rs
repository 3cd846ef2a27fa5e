use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

use rigup_logo::{LogoConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "rigup-logo", version, about = "Generate the RIGUP logo image")]
struct Cli {
    /// JSON file overriding any subset of the generation parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output image path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format. Inferred from the `--out` extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// JPEG quality (1-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// Red/blue channel offset in pixels.
    #[arg(long)]
    aberration: Option<u32>,

    /// Preferred wordmark font file.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print diagnostics about wordmark font resolution (source, family, SHA-256 of font bytes).
    #[arg(long)]
    dump_font: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Jpeg,
    Png,
}

impl From<FormatChoice> for OutputFormat {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Jpeg => OutputFormat::Jpeg,
            FormatChoice::Png => OutputFormat::Png,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let cfg = build_config(&cli)?;
    if cli.dump_font {
        dump_font_diagnostics(&cfg);
    }

    let report = rigup_logo::generate_to_file(&cfg)
        .with_context(|| format!("generate logo '{}'", cfg.output.path.display()))?;

    println!("✓ RIGUP logo generated: {}", report.path.display());
    println!("  Dimensions: {}x{}", report.width, report.height);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<LogoConfig> {
    let mut cfg = match &cli.config {
        Some(path) => LogoConfig::from_json_file(path)?,
        None => LogoConfig::default(),
    };

    if let Some(out) = &cli.out {
        cfg.output.path = out.clone();
        if let Some(format) = OutputFormat::from_path(out) {
            cfg.output.format = format;
        }
    }
    if let Some(format) = cli.format {
        cfg.output.format = format.into();
    }
    if let Some(quality) = cli.quality {
        cfg.output.quality = quality;
    }
    if let Some(amount) = cli.aberration {
        cfg.aberration_px = amount;
    }
    if let Some(font) = &cli.font {
        cfg.font.path = font.clone();
    }

    cfg.validate()?;
    Ok(cfg)
}

fn dump_font_diagnostics(cfg: &LogoConfig) {
    let resolved = rigup_logo::resolve_font(&cfg.font.path);
    eprintln!("wordmark font diagnostics:");
    eprintln!("  source:  {}", resolved.choice);
    match &resolved.font {
        Some(font) => {
            eprintln!("  family:  {}", font.family.as_deref().unwrap_or("(from file)"));
            eprintln!("  index:   {}", font.index);
            eprintln!("  sha256:  {}", sha256_hex(&font.bytes));
        }
        None => eprintln!("  no font bytes"),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
