//! User confirmation prompt before writing to TFE

use std::io::{self, BufRead, Write};

use crate::clone::CloneConfig;

/// Describe what a clone is about to do
pub fn clone_plan(config: &CloneConfig) -> String {
    let mut lines = vec![format!(
        "Clone '{}/{}' to '{}/{}'",
        config.source_organization,
        config.source_workspace,
        config.destination_organization(),
        config.destination_workspace
    )];

    if config.cross_account {
        lines.push(format!(
            "  - destination account, VCS OAuth token '{}'",
            config.destination_vcs_token_id().unwrap_or_default()
        ));
    }
    if config.copy_variables {
        lines.push("  - copy variables (sensitive values are created empty)".to_string());
    }
    if config.copies_state() {
        lines.push("  - copy the latest state".to_string());
    } else if config.copy_state {
        lines.push("  - state is NOT copied within the same account".to_string());
    }

    lines.join("\n")
}

/// Ask the user to confirm an action
///
/// Returns `true` without prompting when `skip` is set.
pub fn confirm_action(prompt: &str, skip: bool) -> io::Result<bool> {
    if skip {
        return Ok(true);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    confirm_from(prompt, &mut input, &mut io::stderr())
}

fn confirm_from<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "{}\n\nProceed? [y/N]: ", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
