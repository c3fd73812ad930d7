/// All service locations are injected here rather than derived from any
/// ambient environment.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Shared base name of the bundle's descriptor and binary resource.
    pub bundle: String,
    /// Base URL the `<bundle>.json` descriptor is fetched from.
    #[arg(long)]
    pub bundle_url: String,
    /// Base URL of the media server hosting the bundle's resource files.
    #[arg(long)]
    pub media_url: String,
    /// Base URL of the scene-management REST backend.
    #[arg(long)]
    pub rest_url: String,
    /// Authorization credential, forwarded verbatim on every backend request.
    #[arg(long)]
    pub auth_token: String,
}
