use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use torscout_client::{IdentityPolicy, ServiceEndpoint, TorServiceClient};
use torscout_core::export::save_json;
use torscout_core::report;
use tracing::warn;
use url::Url;

/// Build a service client from the shared endpoint/identity flags.
pub fn client_from(args: &ArgMatches) -> TorServiceClient {
    let address = args.get_one::<String>("address").unwrap();
    let port = args.get_one::<String>("port").unwrap();
    let identity = if args.get_flag("randomize") {
        IdentityPolicy::Randomized
    } else {
        IdentityPolicy::Fixed
    };
    TorServiceClient::new(ServiceEndpoint::new(address.clone(), port.clone()), identity)
}

/// Expand a user-supplied output directory, resolving a leading tilde.
pub fn expand_output_dir(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

fn fetch_spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(msg.to_string());
    spinner
}

fn save_if_requested<T: serde::Serialize>(args: &ArgMatches, prefix: &str, value: &T) {
    if !args.get_flag("save") {
        return;
    }
    let dir = expand_output_dir(args.get_one::<String>("output").unwrap());
    match save_json(prefix, &dir, value) {
        Ok(path) => println!("{} Saved to {}", "✓".green().bold(), path.display()),
        Err(e) => {
            eprintln!("{} Save failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub async fn handle_tree(args: &ArgMatches) {
    let url = args.get_one::<Url>("url").unwrap();
    let depth = *args.get_one::<u32>("depth").unwrap();
    let classify = args.get_flag("classify");
    let client = client_from(args);

    // Confirm the anonymizing egress before crawling. The tree fetch can
    // still proceed if the check endpoint itself is down.
    if let Err(e) = report::print_tor_ip(&client).await {
        warn!("egress IP check failed: {}", e);
    }

    let spinner = fetch_spinner(&format!("Fetching link tree for {} (depth {})...", url, depth));
    let root = match client.fetch_tree(url.as_str(), depth).await {
        Ok(root) => {
            spinner.finish_and_clear();
            root
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} Tree fetch failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    report::render_tree(&client, &root, classify).await;
}

pub async fn handle_json(args: &ArgMatches) {
    let url = args.get_one::<Url>("url").unwrap();
    let depth = *args.get_one::<u32>("depth").unwrap();
    let client = client_from(args);

    match report::print_json(&client, url.as_str(), depth).await {
        Ok(root) => save_if_requested(args, "tree", &root),
        Err(e) => {
            eprintln!("{} Tree fetch failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub async fn handle_emails(args: &ArgMatches) {
    let url = args.get_one::<Url>("url").unwrap();
    let client = client_from(args);

    match report::print_emails(&client, url.as_str()).await {
        Ok(emails) => save_if_requested(args, "emails", &emails),
        Err(e) => {
            eprintln!("{} Email extraction failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub async fn handle_phones(args: &ArgMatches) {
    let url = args.get_one::<Url>("url").unwrap();
    let client = client_from(args);

    match report::print_phones(&client, url.as_str()).await {
        Ok(phones) => save_if_requested(args, "phones", &phones),
        Err(e) => {
            eprintln!("{} Phone extraction failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub async fn handle_ip(args: &ArgMatches) {
    let client = client_from(args);

    if let Err(e) = report::print_tor_ip(&client).await {
        eprintln!("{} IP check failed: {}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
