use interactive_cli::input::Terminal;
use interactive_cli::parser::{self, FlagAction};
use interactive_cli::{Config, Session, logging};
use std::ffi::OsString;
use std::process::ExitCode;

const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    logging::init();

    let mut config = Config::from_env();
    let program = env!("CARGO_BIN_NAME");
    let args = match utf8_args(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(bad) => {
            eprintln!("argument {bad:?} is not valid UTF-8");
            eprintln!("Run {program} --help for more information.");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    match parser::parse(program, &args) {
        Ok(flags) => match flags.action() {
            Some(FlagAction::ShowHelp) => {
                print!("{}", parser::usage(program));
                return ExitCode::SUCCESS;
            }
            Some(FlagAction::ShowVersion) => {
                println!("Interactive CLI Version {}", config.version);
                return ExitCode::SUCCESS;
            }
            Some(FlagAction::SetPrompt(prompt)) => config.prompt = prompt,
            None => {}
        },
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Run {program} --help for more information.");
            return ExitCode::from(USAGE_ERROR);
        }
    }

    let mut terminal = match Terminal::new() {
        Ok(terminal) => terminal,
        Err(err) => {
            eprintln!("failed to open terminal: {err}");
            return ExitCode::FAILURE;
        }
    };

    match Session::new(config, std::io::stdout()).run(&mut terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Converts process arguments to strings.
///
/// # Returns
/// All arguments in order, or the first one that is not valid UTF-8.
fn utf8_args(args: impl Iterator<Item = OsString>) -> Result<Vec<String>, OsString> {
    args.map(OsString::into_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_args_keeps_order() {
        let args = vec![OsString::from("-p"), OsString::from("** ")];
        assert_eq!(utf8_args(args.into_iter()).unwrap(), vec!["-p", "** "]);
    }

    #[cfg(unix)]
    #[test]
    fn test_utf8_args_reports_bad_argument() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(b"\xffprompt".to_vec());
        let args = vec![OsString::from("-p"), bad.clone()];
        assert_eq!(utf8_args(args.into_iter()), Err(bad));
    }
}
