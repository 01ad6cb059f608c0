use torscout::commands::command_argument_builder;
use torscout::handlers;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        torscout_core::print_banner();
    }

    match chosen_command.subcommand() {
        Some(("tree", sub_matches)) => handlers::handle_tree(sub_matches).await,
        Some(("json", sub_matches)) => handlers::handle_json(sub_matches).await,
        Some(("emails", sub_matches)) => handlers::handle_emails(sub_matches).await,
        Some(("phones", sub_matches)) => handlers::handle_phones(sub_matches).await,
        Some(("ip", sub_matches)) => handlers::handle_ip(sub_matches).await,
        None => {
            // No subcommand provided, just show the banner
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
