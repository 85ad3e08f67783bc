use clap::Parser;

mod commands;
mod output;

use commands::rewrite;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rewire")]
#[command(version = VERSION)]
#[command(about = "Rewrite event effects to take their globals as explicit parameters")]
struct Cli {
    #[command(flatten)]
    args: rewrite::RewriteArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match rewrite::run(cli.args) {
        Ok(_) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            let exit_code = output::exit_code_for_error(err.code);
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
