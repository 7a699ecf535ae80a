use {
    crate::common::{debug_println, DEBUG},
    clap::Parser,
    eval::routine,
    std::{process::ExitCode, sync::atomic::Ordering},
};

#[derive(Debug, Parser)]
pub struct Cli {
    /// Print the final evaluator state after execution
    #[arg(long)]
    print_state: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    let routine = routine::arithmetic_routine();
    debug_println!("{routine:#?}");
    let state = routine.execute();
    debug_println!("{state:#?}");
    if cli.print_state {
        println!("final state:\n{state}");
    }
    // the result leaves the process as its exit status
    let result = routine.result_of(&state);
    Ok(ExitCode::from(u8::try_from(result)?))
}
