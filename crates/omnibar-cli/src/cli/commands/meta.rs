//! `omnibar completions` / `omnibar man` – shell completions and man page.

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut rendered = Vec::new();
    man.render(&mut rendered)?;
    std::io::stdout().write_all(&rendered)?;
    Ok(())
}
