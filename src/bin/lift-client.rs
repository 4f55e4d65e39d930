#![warn(clippy::pedantic)]
#![deny(warnings)]

//! Command-line caller for the Facebook authentication callables
//!
//! Usage: `lift-client <check|submit>` with the caller's ID token in
//! `LIFT_ID_TOKEN`. The outcome is reported as a toast on the log.

use anyhow::{bail, Context as _};
use lift_automator::{
    client::{ClientConfig, FunctionsClient},
    notifications::{notify_authentication_result, toast_error, LogToastSink},
    settings::AppSettings,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::load()?;
    let operation = std::env::args().nth(1).unwrap_or_else(|| "check".to_string());
    let id_token = std::env::var("LIFT_ID_TOKEN").context("LIFT_ID_TOKEN must hold an ID token")?;

    let client = FunctionsClient::new(ClientConfig::from_settings(&settings));
    log::info!(
        "Using {} functions at {}",
        client.config().environment,
        client.config().functions_base_url()?
    );

    let sink = LogToastSink;
    let outcome = match operation.as_str() {
        "check" => client.check_facebook_authentication(&id_token).await,
        "submit" => client.submit_2fa_code(&id_token).await,
        other => bail!("unknown operation {other}, expected check or submit"),
    };

    match outcome {
        Ok(result) => {
            notify_authentication_result(&sink, &result);
            Ok(())
        }
        Err(e) => {
            toast_error(&sink, &e.to_string());
            Err(e.into())
        }
    }
}
