use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Swagger From Routes - Generate an API specification document from route documentation
#[derive(Parser, Debug)]
#[command(name = "swagger-from-routes")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the route manifest file
    #[arg(value_name = "MANIFEST")]
    pub manifest_path: PathBuf,

    /// Output format (json or yaml)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Base document to merge into (overrides the manifest's base_document)
    #[arg(short = 'b', long = "base", value_name = "FILE")]
    pub base_document: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// JSON format (the canonical served form)
    Json,
    /// YAML format
    Yaml,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    // Validate manifest path
    if !args.manifest_path.exists() {
        anyhow::bail!(
            "Manifest file does not exist: {}",
            args.manifest_path.display()
        );
    }
    if !args.manifest_path.is_file() {
        anyhow::bail!(
            "Manifest path is not a file: {}",
            args.manifest_path.display()
        );
    }

    info!("Route manifest: {}", args.manifest_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }
    if let Some(ref base) = args.base_document {
        info!("Base document: {}", base.display());
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::document::SpecDocument;
    use crate::manifest::RouteManifest;
    use crate::merger::DocumentMerger;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

    info!("Starting specification document generation...");

    // Step 1: Load the route manifest
    info!("Loading route manifest...");
    let manifest = RouteManifest::from_yaml_file(&args.manifest_path)?;
    info!("Manifest describes {} routes", manifest.routes.len());

    // Step 2: Build the route table
    let routes = manifest.build_routes()?;

    // Step 3: Prepare the base document
    let base = args
        .base_document
        .as_ref()
        .or(manifest.base_document.as_ref());
    let mut document = match base {
        Some(path) => {
            info!("Loading base document from {}", path.display());
            SpecDocument::from_yaml_file(path)?
        }
        None => {
            info!("Building skeleton document from manifest info");
            SpecDocument::from_info(&manifest.info)
        }
    };

    // Step 4: Merge route documentation into the document
    info!("Merging documentation from {} routes...", routes.len());
    DocumentMerger::merge_all(&routes, &mut document);

    // Step 5: Serialize to the requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Json => serialize_json(&document)?,
        OutputFormat::Yaml => serialize_yaml(&document)?,
    };

    // Step 6: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        write_to_file(&content, output_path)?;
        info!("Wrote specification document to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    info!("Generation complete");
    Ok(())
}
