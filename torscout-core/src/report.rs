//! User-facing reconnaissance operations. Each one makes its remote calls,
//! prints for a human, and hands the data back for optional export.
//!
//! Error policy: a failed top-level fetch means "no data at all" and
//! propagates to the caller. Per-node failures during tree rendering are
//! contained inside the printer and show up as fallback lines instead.

use crate::classify::KeywordClassifier;
use crate::render::{ClassifyingPrinter, StatusPrinter};
use crate::traverse::cascade;
use colored::Colorize;
use std::io;
use torscout_client::{LinkNode, Result, TorServiceClient};
use tracing::info;

/// Walk an already-fetched tree, printing one status line per node.
pub async fn render_tree(client: &TorServiceClient, root: &LinkNode, classify: bool) {
    let stdout = io::stdout();
    if classify {
        let mut printer = ClassifyingPrinter::new(stdout.lock(), client, KeywordClassifier);
        cascade(root, &mut printer).await;
    } else {
        let mut printer = StatusPrinter::new(stdout.lock());
        cascade(root, &mut printer).await;
    }
}

/// Fetch the link tree rooted at `url` and print it node by node.
pub async fn print_tree(
    client: &TorServiceClient,
    url: &str,
    depth: u32,
    classify: bool,
) -> Result<()> {
    let root = client.fetch_tree(url, depth).await?;
    info!("fetched tree with {} nodes for {}", root.size(), url);
    render_tree(client, &root, classify).await;
    Ok(())
}

/// Fetch the link tree and print its full structured form. Returns the root
/// so the caller can export it.
pub async fn print_json(client: &TorServiceClient, url: &str, depth: u32) -> Result<LinkNode> {
    let root = client.fetch_tree(url, depth).await?;
    // Serializing a value we just deserialized cannot fail.
    println!(
        "{}",
        serde_json::to_string_pretty(&root).unwrap_or_default()
    );
    Ok(root)
}

/// Fetch and print the email addresses found on `url`, in service order.
pub async fn print_emails(client: &TorServiceClient, url: &str) -> Result<Vec<String>> {
    let emails = client.fetch_emails(url).await?;
    info!("service returned {} emails for {}", emails.len(), url);
    for email in &emails {
        println!("{email}");
    }
    Ok(emails)
}

/// Fetch and print the phone numbers found on `url`, in service order.
pub async fn print_phones(client: &TorServiceClient, url: &str) -> Result<Vec<String>> {
    let phones = client.fetch_phones(url).await?;
    info!("service returned {} phones for {}", phones.len(), url);
    for phone in &phones {
        println!("{phone}");
    }
    Ok(phones)
}

/// Print the crawler service's egress IP, to confirm traffic is leaving
/// through the intended anonymizing path before a crawl begins.
pub async fn print_tor_ip(client: &TorServiceClient) -> Result<()> {
    println!("Attempting to connect to https://check.torproject.org/");
    let ip = client.fetch_ip().await?;
    println!("Tor IP Address: {}", ip.trim().yellow());
    Ok(())
}
