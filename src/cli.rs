use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: simple_lang [options] [file]
Options:
  -h, --help         Display this help message
  -i, --interactive  Run in interactive mode after executing file
If no file is specified, the interpreter runs in interactive mode.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Help,
    File(PathBuf),
    FileThenInteractive(PathBuf),
}

/// Picks the run mode from the arguments after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Mode {
    let Some(first) = args.first() else {
        return Mode::Interactive;
    };

    match first.as_ref() {
        "-h" | "--help" => Mode::Help,
        "-i" | "--interactive" => match args.get(1) {
            Some(path) => Mode::FileThenInteractive(PathBuf::from(path.as_ref())),
            None => Mode::Interactive,
        },
        path => Mode::File(PathBuf::from(path)),
    }
}
