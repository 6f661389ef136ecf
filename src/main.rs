mod adapters;
mod application;
mod bom_export;
mod cli;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::network::{CachingEnrichmentRepository, HubClient, OpenHubLocator};
use application::dto::ExportRequest;
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::use_cases::ExportDocumentUseCase;
use bom_export::domain::identifier::default_output_stem;
use cli::Args;
use config::HubConfig;
use shared::error::{ExitCode, ExportError};
use shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        report_failure(&e);
        process::exit(exit_code_for(&e));
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments; --basic expands into its flags
    let args = Args::parse_args().normalized();

    // Resolve connection settings from options and environment
    let config = HubConfig::resolve(&args)?;

    // Create adapters (Dependency Injection)
    let hub = HubClient::connect(
        &config.hub_url,
        &config.api_token,
        config.trust_cert,
        config.timeout,
    )
    .await?;
    let enrichment = CachingEnrichmentRepository::new(hub.clone());
    let download_locator = OpenHubLocator::new()?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case =
        ExportDocumentUseCase::new(hub, enrichment, download_locator, progress_reporter);

    // Create request
    let request = ExportRequest {
        project_name: args.project_name.clone(),
        version_name: args.project_version.clone(),
        recursive: args.recursive,
        download_loc: args.download_loc,
        no_copyrights: args.no_copyrights,
        no_files: args.no_files,
        exclude_ignored: config.exclude_ignored,
        debug: args.debug,
    };

    // Execute use case
    let response = use_case.execute(request).await?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(args.format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(args.format);
    let formatted_output = formatter.format(&response.document)?;

    // Present output; the default file name comes from the project version
    let default_name = format!(
        "{}{}",
        default_output_stem(&args.project_name, &args.project_version),
        args.format.extension()
    );
    let presenter = PresenterFactory::create(PresenterType::from_output_arg(
        args.output.as_deref(),
        &default_name,
    ));

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Maps the failure to the documented process exit code.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<ExportError>()
        .map(ExportError::exit_code)
        .unwrap_or(ExitCode::RuntimeError)
        .as_i32()
}

/// Prints the failure where the operator expects it: configuration and
/// name-resolution guidance on stdout, everything else on stderr with
/// the full error chain.
fn report_failure(error: &anyhow::Error) {
    if error
        .downcast_ref::<ExportError>()
        .is_some_and(ExportError::prints_to_stdout)
    {
        println!("\n{}\n", error);
        return;
    }

    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", error);

    // Display error chain
    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }

    eprintln!();
}
