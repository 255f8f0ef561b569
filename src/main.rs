use clap::Parser;
use std::io;

use fshell::Shell;

#[derive(Parser)]
#[command(name = "fshell")]
#[command(about = "An interactive shell for basic file operations")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut shell = Shell::new(stdin, stdout);

    // Command failures are reported inside the loop; an error here means the
    // terminal streams themselves broke.
    if let Err(e) = shell.run() {
        eprintln!("fshell: {}", e);
        std::process::exit(1);
    }
}
