//! Reports a verdict to the user, either as a colored line for humans or as a
//! JSON document for scripts driving an upgrade.
use anyhow::Result;
use colored::*;
use serde::Serialize;

use super::Transition;
use crate::models::{License, Policy};
use crate::rules::{extract_patch, Verdict};

/// Sets the noise level for a reporter
#[derive(Clone, Debug, PartialOrd, PartialEq)]
pub enum Verbosity {
    Quiet,
    Default,
    Verbose,
}

/// Machine readable form of a verdict
#[derive(Debug, Serialize)]
pub struct Report {
    pub from: String,
    pub to: String,
    pub policy: Policy,
    pub from_license: Option<License>,
    pub to_license: Option<License>,
    pub allowed: bool,
    pub code: Option<&'static str>,
    pub reason: Option<String>,
}

impl Report {
    pub fn new(transition: &Transition, verdict: &Verdict) -> Self {
        let (from_license, to_license) = match transition.licenses {
            Some((from, to)) => (Some(from), Some(to)),
            None => (None, None),
        };

        Self {
            from: transition.from.to_string(),
            to: transition.to.to_string(),
            policy: transition.policy,
            from_license,
            to_license,
            allowed: verdict.is_ok(),
            code: verdict.as_ref().err().map(|e| e.code()),
            reason: verdict.as_ref().err().map(|e| e.to_string()),
        }
    }
}

pub struct Reporter {
    v: Verbosity,
    json: bool,
}

impl Reporter {
    pub fn new(v: Verbosity, json: bool) -> Self {
        Self { v, json }
    }

    pub fn report(&self, transition: &Transition, verdict: &Verdict) -> Result<()> {
        if self.v == Verbosity::Quiet {
            return Ok(());
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&Report::new(transition, verdict))?);
            return Ok(());
        }

        if self.v >= Verbosity::Verbose {
            for line in render_inputs(transition) {
                println!("{}", line);
            }
        }
        println!("{}", render_verdict(transition, verdict));

        Ok(())
    }
}

fn render_inputs(transition: &Transition) -> Vec<String> {
    let mut lines = vec![
        format!("From:   {} (patch {})", transition.from, extract_patch(&transition.from)),
        format!("To:     {} (patch {})", transition.to, extract_patch(&transition.to)),
        format!("Policy: {}", transition.policy),
    ];
    if let Some((from, to)) = transition.licenses {
        lines.push(format!("Edition: {} -> {}", from, to));
    }
    lines
}

fn render_verdict(transition: &Transition, verdict: &Verdict) -> String {
    match verdict {
        Ok(()) => format!("{} {} -> {}", "Allowed".green().bold(), transition.from, transition.to),
        Err(e) => format!("{} {} -> {}: {}", "Denied".red().bold(), transition.from, transition.to, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    fn transition(from: &str, to: &str, licenses: Option<(License, License)>) -> Transition {
        Transition {
            from: from.parse::<Version>().unwrap(),
            to: to.parse::<Version>().unwrap(),
            policy: Policy::Strict,
            licenses,
        }
    }

    #[test]
    fn test_report_denied() {
        let t = transition("3.12.6", "4.0.0", None);
        let report = Report::new(&t, &t.evaluate());

        assert!(!report.allowed);
        assert_eq!(report.code, Some("patch_too_low_for_major_upgrade"));
        assert_eq!(report.reason.as_deref(), Some("Upgrade to 4.0 requires at least 3.12.7"));
    }

    #[test]
    fn test_report_json() {
        let t = transition("1.2.3", "1.3.0", Some((License::Community, License::Enterprise)));
        let json = serde_json::to_value(Report::new(&t, &t.evaluate())).unwrap();

        assert_eq!(json["allowed"], true);
        assert_eq!(json["policy"], "strict");
        assert_eq!(json["to_license"], "enterprise");
        assert!(json["reason"].is_null());
    }

    #[test]
    fn test_render_inputs() {
        let lines = render_inputs(&transition("3.12.7-rc1", "4.0.0", None));
        assert_eq!(lines[0], "From:   3.12.7-rc1 (patch 7)");
        assert_eq!(lines.len(), 3);
    }
}
