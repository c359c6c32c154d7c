//! Version comparison for CLI and template store compatibility

use semver::Version;

/// Compare the CLI version against the minimum version the store declares.
/// Returns a warning message if the CLI is older than the templates expect.
pub fn check_compatibility(
    cli_version: &str,
    store_version: Option<&str>,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version)?;
    let store_ver = parse_version(store_version?)?;

    if cli_ver < store_ver {
        Some(format!(
            "These templates were written for CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            store_ver, cli_ver, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse a version string, tolerating a leading `v`. Unparsable versions are
/// not compared.
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}
