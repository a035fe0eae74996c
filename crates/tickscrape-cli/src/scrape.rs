//! The scrape-job command flow: validate, pay, dispatch, present.

use std::process::ExitCode;
use std::sync::Arc;

use tickscrape_core::{
    parse_date, JobClient, JobLifecycleController, JobRequest, LifecycleState, OutputFormat,
    RemoteJobClient, ReqwestHttpClient, SimulatedJobClient,
};

use crate::cli::Cli;
use crate::config;
use crate::error::CliError;
use crate::paywall;
use crate::presenter;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let request = build_request(cli)?;
    let client = build_client(cli)?;
    let mut controller = JobLifecycleController::new(client);

    walk_paywall(cli, &mut controller).await?;

    println!(
        "{}",
        presenter::render(&LifecycleState::Submitting(request.clone()))
    );
    let state = controller.submit(request).await?;
    println!("{}", presenter::render(state));

    Ok(match state {
        LifecycleState::Failed(_) => ExitCode::from(3),
        _ => ExitCode::SUCCESS,
    })
}

fn build_request(cli: &Cli) -> Result<JobRequest, CliError> {
    let request = JobRequest::builder()
        .symbols(cli.symbols.iter().cloned())
        .start_date(parse_date(&cli.start)?)
        .end_date(parse_date(&cli.end)?)
        .output_format(OutputFormat::parse(&cli.format)?)
        .build()?;
    Ok(request)
}

/// Select the dispatcher once for the whole session.
fn build_client(cli: &Cli) -> Result<Arc<dyn JobClient>, CliError> {
    if cli.mock {
        tracing::info!("using simulated dispatcher");
        return Ok(Arc::new(SimulatedJobClient::new()));
    }

    let config = config::remote_config(cli)?;
    tracing::info!(endpoint = %config.endpoint, "using live dispatcher");
    Ok(Arc::new(RemoteJobClient::new(
        Arc::new(ReqwestHttpClient::new()),
        config,
    )))
}

/// Run the one-shot paywall in front of submission.
///
/// The simulated processor plays the external payment SDK: it captures the
/// charge and signals completion, which is folded into the gate via
/// `confirm`. Declining cancels the pending payment and aborts.
async fn walk_paywall(
    cli: &Cli,
    controller: &mut JobLifecycleController,
) -> Result<(), CliError> {
    println!(
        "Payment required: ${:.2} per scraping job.",
        paywall::JOB_PRICE_USD
    );
    controller.payment_mut().initiate()?;

    if cli.decline_payment {
        controller.payment_mut().cancel()?;
        return Err(CliError::PaymentDeclined);
    }

    if paywall::capture(paywall::JOB_PRICE_USD).await {
        controller.payment_mut().confirm()?;
        println!("Payment confirmed.");
    }

    Ok(())
}
