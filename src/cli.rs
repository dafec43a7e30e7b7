use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("check-face-rate")
        .about("Nagios plugin monitoring the face.com API rate limit")
        .arg(
            Arg::new("key")
                .long("key")
                .num_args(1)
                .help("face.com API key"),
        )
        .arg(
            Arg::new("secret")
                .long("secret")
                .num_args(1)
                .help("face.com API secret"),
        )
        .arg(
            Arg::new("crit")
                .long("crit")
                .num_args(1)
                .help("Critical threshold as percent of the limit (0-100)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .num_args(1)
                .help("Override RUST_LOG level (e.g., info, debug)"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue),
        )
}

pub fn init_logging(level: Option<&str>) {
    // Respect explicit level, else default to info, allow env override via RUST_LOG
    if let Some(lvl) = level {
        std::env::set_var("RUST_LOG", lvl);
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
