use crate::classify::{ContentFetcher, PageClassifier};
use crate::traverse::NodeVisitor;
use colored::Colorize;
use std::io::Write;
use torscout_client::LinkNode;
use tracing::debug;

/// Title shown for a node whose line could not be composed.
pub const NOT_FOUND_TITLE: &str = "NOT FOUND";
/// Status shown for a node whose line could not be composed.
pub const UNREACHABLE_STATUS: &str = "Unable to reach destination.";

/// Column width the node title is left-justified into.
pub const TITLE_WIDTH: usize = 60;

/// How a node's status text should be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Redirect,
    Failure,
}

/// Status coloring policy: 2xx success, 3xx redirect, everything else
/// (4xx, 5xx, negatives, sentinels) failure.
pub fn status_tone(code: i64) -> StatusTone {
    match code {
        200..300 => StatusTone::Success,
        300..400 => StatusTone::Redirect,
        _ => StatusTone::Failure,
    }
}

/// One node's composed presentation line, before terminal coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub title: String,
    pub status: String,
    pub tone: StatusTone,
}

impl RenderedLine {
    /// The deliberate fallback for a node that could not be presented.
    pub fn unreachable() -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_string(),
            status: UNREACHABLE_STATUS.to_string(),
            tone: StatusTone::Failure,
        }
    }

    pub fn to_terminal(&self) -> String {
        let status = match self.tone {
            StatusTone::Success => self.status.green(),
            StatusTone::Redirect => self.status.yellow(),
            StatusTone::Failure => self.status.red(),
        };
        format!("{:<width$} {}", self.title, status, width = TITLE_WIDTH)
    }
}

/// Compose a node's line, appending the classification label when one was
/// produced. A node missing any required field composes to the fallback.
pub fn compose_line(node: &LinkNode, classification: Option<&str>) -> RenderedLine {
    let Some((url, code, phrase)) = node.parts() else {
        return RenderedLine::unreachable();
    };
    let mut status = format!("{code} {phrase}");
    if let Some(label) = classification {
        status.push(' ');
        status.push_str(label);
    }
    RenderedLine {
        title: url.to_string(),
        status,
        tone: status_tone(code),
    }
}

/// Prints one status line per node, no classification.
pub struct StatusPrinter<W> {
    out: W,
}

impl<W: Write> StatusPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NodeVisitor for StatusPrinter<W> {
    async fn visit(&mut self, node: &LinkNode) {
        let line = compose_line(node, None);
        writeln!(self.out, "{}", line.to_terminal()).ok();
    }
}

/// Prints one status line per node, labeling each page by fetching its
/// content and running it through the classifier. One extra blocking fetch
/// per node, which is why the CLI gates this behind a flag.
pub struct ClassifyingPrinter<W, F, C> {
    out: W,
    fetcher: F,
    classifier: C,
}

impl<W: Write, F: ContentFetcher, C: PageClassifier> ClassifyingPrinter<W, F, C> {
    pub fn new(out: W, fetcher: F, classifier: C) -> Self {
        Self {
            out,
            fetcher,
            classifier,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    async fn render(&self, node: &LinkNode) -> RenderedLine {
        let Some((url, _, _)) = node.parts() else {
            return RenderedLine::unreachable();
        };
        match self.fetcher.page_content(url).await {
            Ok(content) => compose_line(node, Some(&self.classifier.label(&content))),
            Err(e) => {
                debug!("classification failed for {}: {}", url, e);
                RenderedLine::unreachable()
            }
        }
    }
}

impl<W: Write, F: ContentFetcher, C: PageClassifier> NodeVisitor for ClassifyingPrinter<W, F, C> {
    async fn visit(&mut self, node: &LinkNode) {
        let line = self.render(node).await;
        writeln!(self.out, "{}", line.to_terminal()).ok();
    }
}
