pub mod classify;
pub mod export;
pub mod render;
pub mod report;
pub mod traverse;

pub use render::{ClassifyingPrinter, RenderedLine, StatusPrinter, StatusTone};
pub use traverse::{NodeVisitor, cascade};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_banner() {
    println!(
        r#"
 ______  ____  ___  ___  ___  ____  __  __ ______
/_  __/ / __ \/ _ \/ __|/ __|/ __ \/ / / //_  __/
 / /   / /_/ / , _/\__ \ (__/ /_/ / /_/ /  / /
/_/    \____/_/|_||___/\___|\____/\____/  /_/   v{VERSION}

  torscout - link-tree reconnaissance for onion services
"#
    );
}
