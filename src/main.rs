use std::process::ExitCode;

use smv::SmvError;
use smv::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = smv::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&e.to_string());
            let code = match e.downcast_ref::<SmvError>() {
                Some(err) => {
                    if matches!(err, SmvError::Usage(_)) {
                        out::print_user(&smv::cli::usage());
                    }
                    err.code()
                }
                None => 1,
            };
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
