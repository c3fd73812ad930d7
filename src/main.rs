use clap::Parser;
use sceneport::bundle::HttpBundleSource;
use sceneport::cli::CliArgs;
use sceneport::import;
use sceneport_api_types::client::RestClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    builder.parse_default_env();
    builder.init();

    let args = CliArgs::parse();
    let source = HttpBundleSource::new(&args.bundle_url, &args.media_url);
    let backend = RestClient::new(&args.rest_url, &args.auth_token);

    let report = import::import_bundle(&source, &backend, &args.bundle).await?;

    log::info!("scene {} imported", report.scene_uid);
    for bulk in &report.bulk {
        log::info!(
            "{}: created {}/{}",
            bulk.label,
            bulk.created(),
            bulk.attempted
        );
    }
    if let Some(err) = &report.config_error {
        log::warn!("scene configuration was not applied: {err}");
    }

    Ok(())
}
