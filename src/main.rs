use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use quill::config::{ConfigError, QuillConfig};
use quill::login::{FormMode, LoginForm, SubmitOutcome};
use quill::routes::{POST_SIGN_OUT_ROUTE, Route};
use quill::storage::FileStorage;
use quill::{GuardView, RouteGuard, SessionStore};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}

#[derive(Parser, Debug)]
#[command(name = "quill", about = "Quill session CLI")]
struct Cli {
    /// JSON file standing in for browser local storage.
    #[arg(long, env = "QUILL_STORAGE_PATH")]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    SignOut,
    Whoami,
    /// Visit a screen through the route guard.
    Open { path: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let mut config = QuillConfig::from_env()?;
    if let Some(path) = cli.storage {
        config.storage_path = path;
    }

    let storage = Arc::new(FileStorage::new(&config.storage_path));
    let store = SessionStore::new(storage, config.authenticator()?);

    match cli.command {
        Command::Open { path } => {
            let route = Route::parse(&path).ok_or(CliError::UnknownRoute(path))?;
            Ok(open(&store, route).await)
        }
        Command::SignIn { email, password } => {
            store.initialize();
            let mut form = LoginForm::new(FormMode::SignIn);
            form.email = email;
            form.password = password;
            Ok(report_submit(form.submit(&store).await))
        }
        Command::SignUp { email, password, name } => {
            store.initialize();
            let mut form = LoginForm::new(FormMode::SignUp);
            form.email = email;
            form.password = password;
            form.name = name;
            Ok(report_submit(form.submit(&store).await))
        }
        Command::SignOut => {
            store.initialize();
            store.sign_out();
            println!("signed out -> {POST_SIGN_OUT_ROUTE}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Whoami => {
            store.initialize();
            match store.user() {
                Some(user) => println!("{} <{}> (session {})", user.name, user.email, user.id),
                None => println!("not signed in"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report_submit(outcome: SubmitOutcome) -> ExitCode {
    match outcome {
        SubmitOutcome::Navigate(to) => {
            println!("signed in -> {to}");
            ExitCode::SUCCESS
        }
        SubmitOutcome::Failed(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        SubmitOutcome::Busy => ExitCode::FAILURE,
    }
}

async fn open(store: &SessionStore, route: Route) -> ExitCode {
    if !route.is_protected() {
        store.initialize();
        println!("{}", route.title());
        return ExitCode::SUCCESS;
    }

    let guard = RouteGuard::new(store);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let redirect = guard.install_unauth_redirect(move |path: &str| {
        let _ = tx.send(path.to_owned());
    });
    store.initialize();

    let code = match guard.view(|user| format!("{} (signed in as {})", route.title(), user.name)) {
        GuardView::Protected(screen) => {
            println!("{screen}");
            ExitCode::SUCCESS
        }
        GuardView::Redirecting => {
            if let Some(to) = rx.recv().await {
                println!("redirect -> {to}");
            }
            ExitCode::FAILURE
        }
        GuardView::Placeholder => {
            println!("Loading...");
            ExitCode::FAILURE
        }
    };
    redirect.uninstall();
    code
}
