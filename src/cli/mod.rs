pub mod preferences;
pub mod render;
pub mod summary;
pub mod week;

use std::{
    io::{IsTerminal, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use preferences::{process_preferences_command, PreferencesCommand};
use render::Painter;
use summary::{print_reminder, print_share, print_summary};
use tracing::{debug, level_filters::LevelFilter, warn};
use week::{print_week, process_log_command, process_notes_command, LogCommand, NotesCommand};

use crate::{
    practice::log::PracticeLog,
    preferences::store::PreferencesStore,
    storage::{
        file_store::FileStore, key_value::KeyValueStore, memory_store::MemoryStore,
        PRACTICE_NAMESPACE, PREFERENCES_NAMESPACE,
    },
    utils::{
        clock::{Clock, DefaultClock},
        dir::{create_application_default_path, create_application_path},
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Parser, Debug)]
#[command(name = "MyMusicTime", version, long_about = None)]
#[command(about = "Practice tracker for musicians", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Show minutes practiced this week against the weekly goal")]
    Summary {},
    #[command(about = "Log practice minutes for a day of the week")]
    Log {
        #[command(flatten)]
        command: LogCommand,
    },
    #[command(about = "Save notes for a day of the week")]
    Notes {
        #[command(flatten)]
        command: NotesCommand,
    },
    #[command(about = "Show minutes and notes for every day of the week")]
    Week {},
    #[command(about = "Show or change preferences")]
    Prefs {
        #[command(subcommand)]
        command: PreferencesCommand,
    },
    #[command(about = "Print a message for sharing this week's practice")]
    Share {},
    #[command(about = "Show when the next practice reminder is due")]
    Reminder {},
}

/// Everything a command works with. Each invocation of the binary is one session.
pub struct Session {
    pub practice: PracticeLog,
    pub preferences: PreferencesStore,
    pub clock: Box<dyn Clock>,
    /// Whether output should be colored with the theme palette.
    pub colored: bool,
}

impl Session {
    pub async fn painter(&mut self) -> Painter {
        if self.colored {
            Painter::new(self.preferences.color_theme().await, true)
        } else {
            Painter::plain()
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };

    let app_dir = match args.dir {
        Some(dir) => create_application_path(dir),
        None => create_application_default_path(),
    };
    let app_dir = match app_dir {
        Ok(dir) => {
            enable_logging(CLI_PREFIX, &dir, logging_level, args.log)?;
            Some(dir)
        }
        Err(e) => {
            eprintln!("Can't use the application directory, changes won't be saved: {e:?}");
            None
        }
    };

    let mut session = open_session(
        app_dir.as_deref(),
        Box::new(DefaultClock),
        std::io::stdout().is_terminal(),
    )
    .await;

    let mut out = std::io::stdout().lock();
    process_command(args.commands, &mut session, &mut out).await
}

/// Opens both namespaces in `app_dir`. Without a usable directory the session runs on in-memory
/// stores.
pub async fn open_session(
    app_dir: Option<&Path>,
    clock: Box<dyn Clock>,
    colored: bool,
) -> Session {
    let practice = PracticeLog::open(open_store(app_dir, PRACTICE_NAMESPACE)).await;
    let preferences = PreferencesStore::new(open_store(app_dir, PREFERENCES_NAMESPACE));
    Session {
        practice,
        preferences,
        clock,
        colored,
    }
}

fn open_store(app_dir: Option<&Path>, namespace: &str) -> Arc<dyn KeyValueStore> {
    let Some(app_dir) = app_dir else {
        return Arc::new(MemoryStore::new());
    };
    match FileStore::new(app_dir.to_owned(), namespace) {
        Ok(store) => {
            debug!("Using {:?} for {namespace}", store.path());
            Arc::new(store)
        }
        Err(e) => {
            warn!("Can't open storage for {namespace}, keeping it in memory: {e}");
            Arc::new(MemoryStore::new())
        }
    }
}

async fn process_command(
    command: Commands,
    session: &mut Session,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Summary {} => print_summary(session, out).await,
        Commands::Log { command } => process_log_command(command, session, out).await,
        Commands::Notes { command } => process_notes_command(command, session, out).await,
        Commands::Week {} => print_week(session, out).await,
        Commands::Prefs { command } => {
            process_preferences_command(command, &mut session.preferences, out).await
        }
        Commands::Share {} => print_share(session, out),
        Commands::Reminder {} => print_reminder(session, out).await,
    }
}
