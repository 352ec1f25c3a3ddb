use clap::CommandFactory;
use env_logger::Env;
use log::debug;

use timecard::commands;
use timecard::config::Config;
use timecard::errors::TrackErr;

mod clap_cli;
use clap_cli::{usage, Action, Cli, Parser};

fn run() -> color_eyre::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            e.print()?;
            std::process::exit(code);
        }
    };

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    if cli.configure {
        return commands::config::configure(Config::path()?);
    }

    let (project, action) = match (cli.project.as_deref(), cli.action.as_deref()) {
        (Some(project), Some(action)) => (project, action.parse::<Action>()?),
        _ => {
            return Err(TrackErr::Usage(format!(
                "Expected a project name and an action\n\n{}",
                usage()
            ))
            .into())
        }
    };
    let message = cli.message.unwrap_or_default();
    let time = match cli.offset {
        Some(time) => time,
        None => chrono::Local::now().naive_local(),
    };
    let config = Config::load(Config::path()?)?;
    let dir = config.base_dir(cli.directory)?;
    debug!("{:?} on project {} in {:?}", action, project, dir);

    match action {
        Action::Start => commands::control::start(&dir, project, time)?,
        Action::Stop => commands::control::stop(&dir, project, time, &message)?,
        Action::Abort => commands::control::abort(&dir, project)?,
        Action::Status => commands::status::status(&dir, project)?,
    }

    Ok(())
}

fn main() -> color_eyre::Result<()> {
    if let Err(e) = run() {
        if let Some(inner) = e.downcast_ref::<TrackErr>() {
            log::error!("{}", inner);
            std::process::exit(inner.exit_status().into());
        } else {
            Err(e)
        }
    } else {
        Ok(())
    }
}
