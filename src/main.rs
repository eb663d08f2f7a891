use std::io::{self, Write};
use std::process::Command;

use anyhow::{Context, Result};
use structopt::clap::{AppSettings, ErrorKind};
use structopt::StructOpt;

use ternop::constants::*;
use ternop::{if_cond, parse_condition};

/// Ternary operator. Print IF_TRUE or IF_FALSE depending on CONDITION.
#[derive(StructOpt, Debug)]
#[structopt(name = "ternop", setting = AppSettings::AllowLeadingHyphen)]
struct Opt {
    /// Treat IF_TRUE and IF_FALSE as shell commands and run only the selected one
    #[structopt(short, long)]
    lazy: bool,

    /// Shell used to run commands in lazy mode [default: sh, or cmd on Windows]
    #[structopt(long)]
    shell: Option<String>,

    /// Flag passed to the shell before the command [default: -c, or /C on Windows]
    #[structopt(long, allow_hyphen_values = true)]
    shell_flag: Option<String>,

    /// Condition: true/false, yes/no, on/off, 1/0 (empty is false)
    condition: String,

    /// Value (or command) selected when CONDITION is true
    #[structopt(allow_hyphen_values = true)]
    if_true: String,

    /// Value (or command) selected when CONDITION is false
    #[structopt(allow_hyphen_values = true)]
    if_false: String,
}

fn run_command(shell: &str, shell_flag: &str, command: &str) -> Result<i32> {
    let status = Command::new(shell)
        .arg(shell_flag)
        .arg(command)
        .status()
        .with_context(|| format!("failed to run {:?} with {}", command, shell))?;
    // killed by a signal
    Ok(status.code().unwrap_or(EXIT_FAILURE))
}

fn run(opt: &Opt) -> Result<i32> {
    let cond = parse_condition(&opt.condition)?;

    if opt.lazy {
        let shell = opt.shell.as_deref().unwrap_or(DEFAULT_SHELL);
        let shell_flag = opt.shell_flag.as_deref().unwrap_or(DEFAULT_SHELL_FLAG);
        if_cond(cond)
            .then_lazy(|| run_command(shell, shell_flag, &opt.if_true))
            .else_lazy(|| run_command(shell, shell_flag, &opt.if_false))
    } else {
        let value = if_cond(cond).then(&opt.if_true).else_(&opt.if_false);
        writeln!(io::stdout(), "{}", value).context("failed to write to stdout")?;
        Ok(0)
    }
}

fn main() {
    let opt = Opt::from_args_safe().unwrap_or_else(|e| match e.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
        _ => {
            eprintln!("{}", e);
            std::process::exit(EXIT_FAILURE);
        }
    });

    let code = run(&opt).unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        EXIT_FAILURE
    });
    std::process::exit(code);
}
