use std::process::ExitCode;

use calculator::Expression;
use clap::Parser;

/// Evaluates `<number> <operator> <number>`, e.g. `calc 12 + 5`.
#[derive(Debug, Parser)]
#[command(name = "calc", version)]
struct Args {
    #[arg(allow_hyphen_values = true)]
    lhs: String,
    #[arg(allow_hyphen_values = true)]
    op: String,
    #[arg(allow_hyphen_values = true)]
    rhs: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match Expression::from_parts(&args.lhs, &args.op, &args.rhs).and_then(|expr| expr.evaluate()) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
