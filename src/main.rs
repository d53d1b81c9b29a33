use std::env;
use std::process;

use clap::{arg, command, ArgMatches, Command, ErrorKind};

mod error;
mod input;
mod secret;
mod service;
mod totp;
mod writer;

#[cfg(test)]
mod tests;

use error::TotpError;
use input::normalize;
use secret::decode_secret;
use totp::{generate, get_moving_factor, Clock, GetTime};
use writer::{OutErr, TotpWriter};

fn cli() -> Command<'static> {
    command!()
        .about("Generate a time-based one-time password for a service")
        .args(&[
            arg!(<SECRET> "Base32-encoded shared secret (whitespace is ignored)"),
            arg!([SERVICE] "Target service: google, github, gitlab or bitbucket")
                .default_value("google"),
            arg!([INTERVAL] "Update interval in seconds").default_value("30"),
        ])
}

fn main() {
    let mut writer = TotpWriter::new();
    let clock = Clock::new();
    let args: Vec<String> = env::args().collect();

    process::exit(run(&args, &clock, &mut writer));
}

/// Parse and validate the arguments, run the pipeline, and map the outcome
/// to an exit code. The only bytes ever written to the primary sink are the
/// final code and its newline.
fn run<C, W>(args: &[String], clock: &C, writer: &mut W) -> i32
where
    C: GetTime,
    W: OutErr,
{
    let mut cmd = cli();
    let usage = cmd.render_usage();

    let matches = match cmd.try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
        }
    };

    match generate_code(&matches, clock) {
        Ok(code) => {
            writer.write(&format!("{}\n", code));
            0
        }
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            if let TotpError::InvalidInput(_) = err {
                writer.write_err(&format!("{}\n", usage));
            }
            err.exit_code()
        }
    }
}

fn generate_code<C: GetTime>(matches: &ArgMatches, clock: &C) -> Result<String, TotpError> {
    let raw_secret = matches.value_of("SECRET").unwrap_or_default();
    let raw_service = matches.value_of("SERVICE").unwrap_or_default();
    let raw_interval = matches.value_of("INTERVAL").unwrap_or_default();

    let normalized = normalize(raw_secret, raw_service, raw_interval)?;
    let key = decode_secret(&normalized.secret)?;
    let moving_factor = get_moving_factor(clock, normalized.interval);

    generate(&key, &normalized.service.profile(), moving_factor)
}
