//! Provides parsing and validation of command line arguments into a
//! transition the upgrade rules can evaluate

use crate::{
    models::{License, Policy, Version},
    rules::{self, min_patch_rules},
};

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::process::ExitCode;

mod reporter;

pub use reporter::{Report, Reporter, Verbosity};

/// Environment variable supplying the policy when none is given on the command line
const POLICY_ENV: &str = "UPGRADE_RULES_POLICY";

/// A proposed transition, as requested on the command line
#[derive(Debug)]
pub struct Transition {
    pub from: Version,
    pub to: Version,
    pub policy: Policy,
    pub licenses: Option<(License, License)>,
}

impl Transition {
    pub fn evaluate(&self) -> rules::Verdict {
        match (self.licenses, self.policy) {
            (None, Policy::Strict) => rules::check_upgrade_rules(&self.from, &self.to),
            (None, Policy::Permissive) => rules::check_soft_upgrade_rules(&self.from, &self.to),
            (Some((from_license, to_license)), Policy::Strict) => {
                rules::check_upgrade_rules_with_license(&self.from, &self.to, from_license, to_license)
            },
            (Some((from_license, to_license)), Policy::Permissive) => {
                rules::check_soft_upgrade_rules_with_license(&self.from, &self.to, from_license, to_license)
            },
        }
    }
}

pub struct CLI {
    matches: ArgMatches,
}

impl CLI {
    pub fn init() -> Result<CLI> {
        let matches = get_cli_definition().get_matches();
        let cli = CLI { matches };

        Ok(cli)
    }

    pub fn run(&self) -> Result<ExitCode> {
        match self.matches.subcommand() {
            Some(("check", matches)) => {
                let transition = get_transition(matches)?;
                let reporter = Reporter::new(get_verbosity_level(matches)?, matches.get_flag("json"));
                let verdict = transition.evaluate();
                reporter.report(&transition, &verdict)?;

                Ok(match verdict {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(_) => ExitCode::from(2),
                })
            },
            Some(("rules", _)) => {
                for (major, minor, patch) in min_patch_rules() {
                    println!("{}.{}.x -> {}.0 requires at least {}.{}.{}", major, minor, major + 1, major, minor, patch);
                }
                Ok(ExitCode::SUCCESS)
            },
            _ => Err(anyhow!("No subcommand given")),
        }
    }
}

fn get_verbosity_level(matches: &ArgMatches) -> Result<Verbosity> {
    let verbose = matches.get_flag("verbose");
    let quiet = matches.get_flag("quiet");

    if verbose && quiet {
        return Err(anyhow!("Only one of --verbose or --quiet can be used at a time"));
    }

    if verbose {
        Ok(Verbosity::Verbose)
    } else if quiet {
        Ok(Verbosity::Quiet)
    } else {
        Ok(Verbosity::Default)
    }
}

fn get_transition(matches: &ArgMatches) -> Result<Transition> {
    let from = get_version(matches, "from")?;
    let to = get_version(matches, "to")?;

    Ok(Transition {
        from,
        to,
        policy: get_policy(matches)?,
        licenses: get_licenses(matches)?,
    })
}

fn get_version(matches: &ArgMatches, id: &str) -> Result<Version> {
    let input = matches
        .get_one::<String>(id)
        .ok_or_else(|| anyhow!("Missing {} version", id))?;

    input.parse::<Version>().with_context(|| format!("Invalid {} version '{}'", id, input))
}

fn get_policy(matches: &ArgMatches) -> Result<Policy> {
    if matches.get_flag("soft") {
        if matches.contains_id("policy") {
            return Err(anyhow!("--soft cannot be combined with --policy"));
        }
        return Ok(Policy::Permissive);
    }

    match matches.get_one::<String>("policy") {
        Some(p) => p.parse(),
        None => match std::env::var(POLICY_ENV) {
            Ok(p) => p.parse().with_context(|| format!("Invalid {}", POLICY_ENV)),
            Err(_) => Ok(Policy::default()),
        },
    }
}

/// A single license flag means the edition stays the same
fn get_licenses(matches: &ArgMatches) -> Result<Option<(License, License)>> {
    let parse = |id: &str| -> Result<Option<License>> {
        match matches.get_one::<String>(id) {
            Some(l) => Ok(Some(l.parse()?)),
            None => Ok(None),
        }
    };

    Ok(match (parse("from_license")?, parse("to_license")?) {
        (None, None) => None,
        (Some(from), None) => Some((from, from)),
        (None, Some(to)) => Some((to, to)),
        (Some(from), Some(to)) => Some((from, to)),
    })
}

fn get_cli_definition() -> Command {
    Command::new("upgrade-rules")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks whether a deployment may be upgraded from one version to another")
        .subcommand_required(true)
        .subcommand(
            Command::new("check")
                .about("Evaluate a single proposed transition")
                .arg(
                    Arg::new("from")
                        .help("The currently deployed version")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .help("The version to upgrade to")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("policy")
                        .help("How minor version changes are checked")
                        .long("policy")
                        .value_parser(["strict", "permissive"])
                        .value_name("POLICY")
                        .num_args(1),
                )
                .arg(
                    Arg::new("soft")
                        .help("Allow skipping minor versions, same as --policy permissive")
                        .action(clap::ArgAction::SetTrue)
                        .short('s')
                        .long("soft"),
                )
                .arg(
                    Arg::new("from_license")
                        .help("License of the current deployment")
                        .long("from-license")
                        .value_name("LICENSE")
                        .num_args(1),
                )
                .arg(
                    Arg::new("to_license")
                        .help("License of the upgraded deployment")
                        .long("to-license")
                        .value_name("LICENSE")
                        .num_args(1),
                )
                .arg(
                    Arg::new("json")
                        .help("Print the verdict as JSON")
                        .action(clap::ArgAction::SetTrue)
                        .long("json"),
                )
                .arg(
                    Arg::new("verbose")
                        .help("Enable verbose output")
                        .action(clap::ArgAction::SetTrue)
                        .short('v')
                        .long("verbose"),
                )
                .arg(
                    Arg::new("quiet")
                        .help("Suppress output, report through the exit code only")
                        .action(clap::ArgAction::SetTrue)
                        .short('q')
                        .long("quiet"),
                ),
        )
        .subcommand(Command::new("rules").about("List the minimum patch required before each major upgrade"))
}
