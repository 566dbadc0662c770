//! CLI commands.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cnp::core::checksum;
use cnp::{CnpService, ServiceConfig, ValidationResponse};
use tracing::info;

/// cnpv - Validate Romanian personal numeric codes (CNP).
#[derive(Debug, Parser)]
#[command(name = "cnpv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate one or more CNPs.
    Check {
        /// Candidates to validate.
        #[arg(required = true)]
        cnps: Vec<String>,

        /// Print one JSON response per candidate.
        #[arg(long)]
        json: bool,
    },

    /// Compute the control digit for a 12-digit prefix.
    ControlDigit {
        /// The first 12 digits of a CNP.
        prefix: String,
    },
}

/// Outcome of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every candidate was valid.
    AllValid,
    /// At least one candidate was invalid.
    SomeInvalid,
}

impl Cli {
    /// Run the command, writing results to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<Outcome> {
        match &self.command {
            Commands::Check { cnps, json } => check(cnps, *json, out),
            Commands::ControlDigit { prefix } => control_digit(prefix, out),
        }
    }
}

fn check(cnps: &[String], json: bool, out: &mut impl Write) -> Result<Outcome> {
    let service = CnpService::new(ServiceConfig {
        include_diagnostics: true,
        ..ServiceConfig::default()
    });

    let mut invalid = 0usize;
    for candidate in cnps {
        let response = service.respond(candidate);
        if !response.is_cnp_valid {
            invalid += 1;
        }

        if json {
            writeln!(out, "{}", response.to_json()?)?;
        } else {
            writeln!(out, "{}: {}", candidate, describe(&response))?;
        }
    }

    info!(total = cnps.len(), invalid, "check finished");

    Ok(if invalid == 0 {
        Outcome::AllValid
    } else {
        Outcome::SomeInvalid
    })
}

fn describe(response: &ValidationResponse) -> String {
    if response.is_cnp_valid {
        return "valid".to_string();
    }
    match &response.failed_checks {
        Some(checks) if !checks.is_empty() => {
            let names: Vec<_> = checks.iter().map(|c| c.name()).collect();
            format!("invalid ({})", names.join(", "))
        }
        _ => "invalid".to_string(),
    }
}

fn control_digit(prefix: &str, out: &mut impl Write) -> Result<Outcome> {
    let digits = checksum::parse_prefix(prefix)
        .with_context(|| format!("invalid prefix {prefix:?}"))?;
    let cnp = checksum::complete(&digits, &cnp::core::CHECKSUM_WEIGHTS);

    writeln!(out, "control digit: {}", cnp.control())?;
    writeln!(out, "cnp: {}", cnp)?;
    Ok(Outcome::AllValid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (Result<Outcome>, String) {
        let cli = Cli::try_parse_from(std::iter::once("cnpv").chain(args.iter().copied()))
            .expect("arguments parse");
        let mut out = Vec::new();
        let result = cli.run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check_valid() {
        let (result, out) = run(&["check", "1621126400074"]);
        assert_eq!(result.unwrap(), Outcome::AllValid);
        assert_eq!(out, "1621126400074: valid\n");
    }

    #[test]
    fn test_check_mixed() {
        let (result, out) = run(&["check", "1621126400074", "1621326400074"]);
        assert_eq!(result.unwrap(), Outcome::SomeInvalid);
        assert_eq!(
            out,
            "1621126400074: valid\n1621326400074: invalid (month_day, checksum)\n"
        );
    }

    #[test]
    fn test_check_json() {
        let (result, out) = run(&["check", "--json", "1621126400074", "abc"]);
        assert_eq!(result.unwrap(), Outcome::SomeInvalid);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"success":1,"isCnpValid":true,"failedChecks":[]}"#,
                r#"{"success":1,"isCnpValid":false,"failedChecks":["format"]}"#,
            ]
        );
    }

    #[test]
    fn test_control_digit() {
        let (result, out) = run(&["control-digit", "162112640007"]);
        assert_eq!(result.unwrap(), Outcome::AllValid);
        assert_eq!(out, "control digit: 4\ncnp: 1621126400074\n");
    }

    #[test]
    fn test_control_digit_bad_prefix() {
        let (result, _) = run(&["control-digit", "1621"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid prefix"));
    }

    #[test]
    fn test_check_requires_input() {
        assert!(Cli::try_parse_from(["cnpv", "check"]).is_err());
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["cnpv", "-vv", "check", "1621126400074"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
