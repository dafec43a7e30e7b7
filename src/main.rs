mod check;
mod cli;
mod config;
mod error;
mod http;
mod status;

use config::Config;
use log::info;
use status::Outcome;

#[tokio::main(flavor = "current_thread")] // one blocking check, no parallelism
async fn main() {
    let cmd = cli::build_cli();
    let matches = cmd.get_matches();
    let log_level = matches.get_one::<String>("log-level").cloned();
    let version_flag = matches.get_flag("version");

    cli::init_logging(log_level.as_deref());

    if version_flag {
        println!("check-face-rate {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let outcome = run(&matches).await;
    // The report is the last action on every path; stdout carries only
    // the Nagios line, logs go to stderr.
    println!("{}", outcome.render());
    std::process::exit(outcome.status.exit_code());
}

async fn run(matches: &clap::ArgMatches) -> Outcome {
    let cfg = match Config::from_matches(matches) {
        Ok(cfg) => cfg,
        Err(e) => return e.into(),
    };

    let client = match http::build_client(&cfg) {
        Ok(client) => client,
        Err(e) => return error::CheckError::Transport(e).into(),
    };

    // Request-time wall clock; reset_time validation and the rate
    // window both measure against this instant.
    let now = chrono::Utc::now().timestamp();

    let body = match http::fetch_limits(&client, &cfg).await {
        Ok(body) => body,
        Err(e) => return e.into(),
    };

    let report = match check::validate_body(&body, now) {
        Ok(report) => report,
        Err(e) => return e.into(),
    };
    info!(
        "usage report: used={} remaining={} limit={} reset_time={}",
        report.used, report.remaining, report.limit, report.reset_time
    );

    check::evaluate(&report, cfg.critical_percent, now)
}
