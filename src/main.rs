use dotenvy::dotenv;
use std::process::ExitCode;
use token_probe::{get_subscriber, init_subscriber, BlockingTokenProbe, ProbeConfig};

fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    let configuration = ProbeConfig::load()?;

    let subscriber = get_subscriber("token-probe", configuration.log_level(), std::io::stderr);
    init_subscriber(subscriber)?;

    tracing::info!(
        "Starting token probe with configuration: {}{:#?}{}",
        "\n",
        &configuration,
        "\n"
    );

    let probe = BlockingTokenProbe::try_default()?;
    let result = probe.has_token_sync(Some(configuration.base_url()));

    println!("{}", serde_json::to_string(&result)?);

    if result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
