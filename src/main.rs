//! Swagger From Routes - Command-line specification document generator.
//!
//! This binary generates a complete OpenAPI/Swagger-style document from a
//! route manifest: a YAML description of an application's route table, with
//! inline doc blocks, per-verb dispatch documentation, or references to
//! external documentation files.
//!
//! # Usage
//!
//! ```bash
//! swagger-from-routes [OPTIONS] <MANIFEST>
//! ```
//!
//! # Examples
//!
//! Generate the JSON document served to consumers:
//! ```bash
//! swagger-from-routes routes.yaml -o swagger.json
//! ```
//!
//! Generate YAML for human review:
//! ```bash
//! swagger-from-routes routes.yaml -f yaml
//! ```
//!
//! Merge into an existing base document:
//! ```bash
//! swagger-from-routes routes.yaml -b base.yaml -o swagger.json
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use swagger_from_routes::cli;

fn main() -> Result<()> {
    // Parse once up front so the verbose flag can configure the logger
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("swagger-from-routes starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("Specification document generation completed successfully");

    Ok(())
}
