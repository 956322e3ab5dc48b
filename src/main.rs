use log::{debug, info};
use simple_lang::cli::{self, Mode};
use simple_lang::{repl, DynResult, Session};

fn main() -> DynResult {
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let mode = cli::parse_args(&args);
    info!("{:?}", mode);

    let mut session = Session::stdio();
    match mode {
        Mode::Help => {
            println!("{}", cli::USAGE);
        }
        Mode::Interactive => repl::run(&mut session)?,
        Mode::File(path) => {
            session.run_file(&path)?;
        }
        Mode::FileThenInteractive(path) => {
            session.run_file(&path)?;
            repl::run(&mut session)?;
        }
    }

    Ok(())
}
