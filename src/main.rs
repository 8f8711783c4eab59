use clap::Parser;
use pallet_tag::{PipelineError, TagConfig, TagPipelineBuilder};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate printable pallet tags (6 in x 4 in) from spreadsheet rows.
#[derive(Parser, Debug)]
#[command(name = "pallet-tag", version, about)]
struct Cli {
    /// Spreadsheets to convert (.xlsx, .xlsm, .xls, .xlsb, .ods, .csv).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logo image path or file:// URL.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Directory for the generated PDFs (defaults to next to each input).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Also format the net weight to two decimals.
    #[arg(long)]
    format_net_weight: bool,

    /// Write uncompressed content streams.
    #[arg(long)]
    no_compress: bool,

    /// Print each page's draw instructions as JSON instead of writing PDFs.
    #[arg(long)]
    dump_ops: bool,
}

impl Cli {
    fn tag_config(&self) -> Result<TagConfig, PipelineError> {
        let mut config = match &self.config {
            Some(path) => TagConfig::from_file(path)?,
            None => TagConfig::default(),
        };
        if let Some(logo) = &self.logo {
            config.logo_path = Some(logo.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        config.format_net_weight |= self.format_net_weight;
        if self.no_compress {
            config.compress_streams = false;
        }
        Ok(config)
    }
}

async fn run(cli: Cli) -> Result<(), PipelineError> {
    let pipeline = TagPipelineBuilder::new()
        .with_config(cli.tag_config()?)
        .build()?;

    for input in &cli.inputs {
        if cli.dump_ops {
            if let Some(document) = pipeline.generate(input).await? {
                println!("{}", serde_json::to_string_pretty(document.pages())?);
            }
            continue;
        }

        match pipeline.generate_to_file(input).await? {
            Some(output) => println!("{} -> {}", input.display(), output.display()),
            None => println!("{}: no data rows, nothing written", input.display()),
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("pallet_tag=info"))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
