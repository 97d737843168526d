//! completion command - Generate shell completion scripts

use std::io::Write;

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

/// Write a completion script for `shell` to `out`.
pub fn completion(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let generator = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
    };
    generate(generator, &mut cmd, name, out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_subcommands() {
        let mut out = Vec::new();
        completion(Shell::Bash, &mut out).unwrap();

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("hasher"));
        assert!(script.contains("vertices"));
        assert!(script.contains("edges"));
    }
}
