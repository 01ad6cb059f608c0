//! Page classification support for the status printer.
//!
//! Classification is display-only: the label rides along on a node's rendered
//! line and is never written back onto the tree.

use torscout_client::{Result, TorServiceClient};

/// Fetches the raw content of a page so it can be classified. Abstracted
/// from the concrete client so tests can stub the expensive network call.
#[allow(async_fn_in_trait)]
pub trait ContentFetcher {
    async fn page_content(&self, link: &str) -> Result<String>;
}

impl ContentFetcher for TorServiceClient {
    async fn page_content(&self, link: &str) -> Result<String> {
        self.fetch_page_content(link).await
    }
}

impl<T: ContentFetcher> ContentFetcher for &T {
    async fn page_content(&self, link: &str) -> Result<String> {
        (**self).page_content(link).await
    }
}

/// Black-box labeling of page content.
pub trait PageClassifier {
    fn label(&self, content: &str) -> String;
}

impl<T: PageClassifier> PageClassifier for &T {
    fn label(&self, content: &str) -> String {
        (**self).label(content)
    }
}

const CATEGORIES: &[(&str, &[&str])] = &[
    ("Marketplace", &["market", "vendor", "escrow", "product", "cart"]),
    ("Forum", &["forum", "thread", "board", "reply", "member"]),
    ("Blog", &["blog", "article", "author", "comment", "archive"]),
    ("Search Engine", &["search", "query", "results", "index"]),
    ("File Hosting", &["upload", "download", "mirror", "hosting", "file"]),
    ("Cryptocurrency", &["bitcoin", "wallet", "monero", "exchange", "btc"]),
];

/// Keyword-frequency classifier. Counts case-insensitive keyword hits per
/// category and returns the category with the most hits, or "Unknown" when
/// nothing matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl PageClassifier for KeywordClassifier {
    fn label(&self, content: &str) -> String {
        let haystack = content.to_lowercase();
        CATEGORIES
            .iter()
            .map(|(name, keywords)| {
                let hits: usize = keywords
                    .iter()
                    .map(|kw| haystack.matches(kw).count())
                    .sum();
                (*name, hits)
            })
            .filter(|(_, hits)| *hits > 0)
            .max_by_key(|(_, hits)| *hits)
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
