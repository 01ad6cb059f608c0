use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

/// Flags shared by every subcommand that talks to the crawler service.
fn service_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        arg!(-a --"address" <ADDRESS>)
            .required(false)
            .help("Address the crawler service is listening on")
            .default_value("localhost"),
    )
    .arg(
        arg!(-p --"port" <PORT>)
            .required(false)
            .help("Port the crawler service is listening on")
            .default_value("8081"),
    )
    .arg(
        arg!(-r --"randomize" "Randomize the client identity header on every request")
            .required(false),
    )
}

fn target_arg(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        arg!(-u --"url" <URL>)
            .required(true)
            .help("The URL to use as the root of the reconnaissance")
            .value_parser(clap::value_parser!(Url)),
    )
}

fn save_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(arg!(-s --"save" "Save the results to a timestamped JSON file").required(false))
        .arg(
            arg!(-o --"output" <DIR>)
                .required(false)
                .help("Directory to save results into (supports ~)")
                .default_value("."),
        )
}

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("torscout")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("torscout")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(service_args(target_arg(
            command!("tree")
                .about(
                    "Fetch the link tree rooted at a URL and print one status line per \
                page discovered.",
                )
                .arg(
                    arg!(-d --"depth" <DEPTH>)
                        .required(false)
                        .help("How many levels of links the service should resolve")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("1"),
                )
                .arg(
                    arg!(-c --"classify" "Classify each page's content (one extra fetch per page, slow)")
                        .required(false),
                ),
        )))
        .subcommand(save_args(service_args(target_arg(
            command!("json")
                .about("Fetch the link tree and dump it as structured JSON")
                .arg(
                    arg!(-d --"depth" <DEPTH>)
                        .required(false)
                        .help("How many levels of links the service should resolve")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("1"),
                ),
        ))))
        .subcommand(save_args(service_args(target_arg(
            command!("emails").about("Extract email addresses found on the target page"),
        ))))
        .subcommand(save_args(service_args(target_arg(
            command!("phones").about("Extract phone numbers found on the target page"),
        ))))
        .subcommand(service_args(command!("ip").about(
            "Show the crawler service's egress IP to confirm the anonymizing path",
        )))
}
