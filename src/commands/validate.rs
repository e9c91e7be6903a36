//! Validate command implementation
//!
//! Runs the folder checks of an install without discovering or writing anything.

use std::path::Path;

use console::Style;

use super::{EXIT_FAILURE, EXIT_OK, resolve_config};
use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::error::validation::missing_path;
use crate::ui::format_error;
use crate::validation;

/// One check and what it found
struct Check {
    label: &'static str,
    path: String,
    problem: Option<String>,
}

/// Run validate command
pub fn run(config_file: Option<&Path>, args: ValidateArgs) -> Result<i32> {
    let config = match resolve_config(config_file, args.targets) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", format_error(&err));
            return Ok(EXIT_FAILURE);
        }
    };
    let Some(sqx) = config.sqx.filter(|p| !p.as_os_str().is_empty()) else {
        eprintln!("{}", format_error(&missing_path("sqx")));
        return Ok(EXIT_FAILURE);
    };

    let mut checks = vec![primary_check(&sqx)];
    if let Some(mt5) = config.mt5.filter(|p| !p.as_os_str().is_empty()) {
        checks.push(secondary_check(&mt5));
    }
    if let Some(scripts) = config.scripts.filter(|p| !p.as_os_str().is_empty()) {
        checks.push(source_check(&scripts));
    }

    for check in &checks {
        println!("{}", render(check));
    }

    if checks.iter().any(|c| c.problem.is_some()) {
        Ok(EXIT_FAILURE)
    } else {
        Ok(EXIT_OK)
    }
}

fn primary_check(folder: &Path) -> Check {
    let missing = validation::missing_primary_markers(folder);
    Check {
        label: "StrategyQuant X folder",
        path: folder.display().to_string(),
        problem: (!missing.is_empty()).then(|| format!("missing {}", missing.join(", "))),
    }
}

fn secondary_check(folder: &Path) -> Check {
    let missing = validation::missing_secondary_markers(folder);
    Check {
        label: "MetaTrader 5 folder",
        path: folder.display().to_string(),
        problem: (!missing.is_empty()).then(|| format!("missing {}", missing.join(", "))),
    }
}

fn source_check(folder: &Path) -> Check {
    Check {
        label: "Scripts folder",
        path: folder.display().to_string(),
        problem: (!validation::source_has_installables(folder))
            .then(|| "no .sxp scripts found".to_string()),
    }
}

fn render(check: &Check) -> String {
    match &check.problem {
        None => format!(
            "{} {} {}",
            Style::new().bold().green().apply_to("ok"),
            check.label,
            check.path
        ),
        Some(problem) => format!(
            "{} {} {}: {problem}",
            Style::new().bold().red().apply_to("failed"),
            check.label,
            check.path
        ),
    }
}
