use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use client_core::{
    config, HttpWaitlistClient, SubmissionStatus, SubmitRejected, ViewController, WaitlistClient,
};

#[derive(Parser, Debug)]
#[command(about = "Join the Thumbsy waitlist from the command line")]
struct Args {
    #[arg(long)]
    email: String,
    /// Waitlist registration endpoint; overrides file and environment settings.
    #[arg(long)]
    endpoint: Option<String>,
    /// Settings file to read instead of ./waitlist.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => config::load_settings_from(path, |name| std::env::var(name).ok()),
        None => config::load_settings(),
    }
    .context("failed to load waitlist settings")?
    .with_endpoint_override(args.endpoint.as_deref())?;
    tracing::info!(endpoint = %settings.endpoint_url, "joining waitlist");

    let client = HttpWaitlistClient::new(settings.endpoint_url);
    join_once(&client, &args.email).await?;
    println!("You're on the list! Thanks for joining.");
    Ok(())
}

/// Walks the same Landing -> Signup -> submit path as the window does.
async fn join_once<W>(client: &W, email: &str) -> Result<()>
where
    W: WaitlistClient + ?Sized,
{
    let mut views = ViewController::new();
    views.request_signup();
    let form = views
        .signup_mut()
        .ok_or_else(|| anyhow!("signup view did not open"))?;
    form.update_email(email);

    match form.submit(client).await {
        Ok(()) => {}
        Err(SubmitRejected::InvalidEmail(err)) => bail!("{} ({err})", err.user_message()),
        Err(rejected) => bail!(rejected),
    }

    match form.status() {
        SubmissionStatus::Success => Ok(()),
        SubmissionStatus::Error(message) => bail!("{message}"),
        other => bail!("submission ended in unexpected state '{}'", other.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use client_core::WaitlistError;
    use shared::domain::EmailAddress;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedWaitlist {
        outcome: Result<(), WaitlistError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WaitlistClient for ScriptedWaitlist {
        async fn join_waitlist(&self, _email: &EmailAddress) -> Result<(), WaitlistError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn scripted(outcome: Result<(), WaitlistError>) -> ScriptedWaitlist {
        ScriptedWaitlist {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn succeeds_when_endpoint_accepts() {
        let client = scripted(Ok(()));
        join_once(&client, "a@b.com").await.expect("joined");
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reports_endpoint_message() {
        let client = scripted(Err(WaitlistError::Rejected {
            status: 400,
            message: Some("already registered".to_string()),
        }));
        let err = join_once(&client, "a@b.com").await.expect_err("rejected");
        assert_eq!(err.to_string(), "already registered");
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_endpoint() {
        let client = scripted(Ok(()));
        let err = join_once(&client, "a@").await.expect_err("invalid");
        assert!(err.to_string().starts_with("Please enter a valid email address."));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }
}
