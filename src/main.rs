use std::io::Write;

use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use portal::config::{BackendConfig, LoginPolicy};
use portal::form::AuthForm;
use portal::net::{ApiError, HttpBackend, LoginResult, RegistrationResult};
use portal::pages::home::render_home;
use portal::pages::login::render_login;
use portal::pages::navbar::render_navbar;
use portal::pages::{Route, TerminalShell, render_contact};
use portal::session::SessionStore;
use portal::state::auth::{AuthMode, Field, FormError};

type Form = AuthForm<HttpBackend, TerminalShell>;

const HELP: &str = "\
commands:
  go <home|login|contact>    open a page
  mode <login|register>      switch the auth form
  set <field> <value>        fill email, password, name or surname
  submit                     submit the auth form
  whoami                     show the session user
  help                       show this text
  quit                       exit";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("form error: {0}")]
    Form(#[from] FormError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing or invalid fields: {0}")]
    Invalid(String),
    #[error("submission failed: {0}")]
    Failed(String),
}

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Portal terminal client")]
struct Cli {
    /// Check credentials with `POST /login` before accepting a login.
    #[arg(long, default_value_t = false)]
    verify_login: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (default).
    Interactive,
    /// Create an account.
    Register(RegisterArgs),
    /// Log in and show the landing page.
    Login(LoginArgs),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    surname: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = BackendConfig::from_env();
    if cli.verify_login {
        config.login_policy = LoginPolicy::Verify;
    }
    tracing::info!(address = %config.address(), policy = ?config.login_policy, "portal starting");

    let backend = HttpBackend::new(&config)?;
    let form = AuthForm::new(SessionStore::new(), backend, TerminalShell::new(Route::Home))
        .with_login_policy(config.login_policy);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => run_interactive(&form).await,
        Command::Register(args) => run_register(&form, args).await,
        Command::Login(args) => run_login(&form, args).await,
    }
}

// =============================================================================
// ONE-SHOT COMMANDS
// =============================================================================

async fn run_register(form: &Form, args: RegisterArgs) -> Result<(), CliError> {
    form.switch_mode(AuthMode::Register)?;
    form.set_field(Field::Name, args.name);
    form.set_field(Field::Surname, args.surname);
    form.set_field(Field::Email, args.email);
    form.set_field(Field::Password, args.password);
    check_required(form)?;

    match form.submit_register().await? {
        RegistrationResult::Created => Ok(()),
        RegistrationResult::Rejected(message) => Err(CliError::Failed(message)),
        RegistrationResult::Unreachable => Err(CliError::Failed("backend unreachable".to_owned())),
    }
}

async fn run_login(form: &Form, args: LoginArgs) -> Result<(), CliError> {
    form.set_field(Field::Email, args.email);
    form.set_field(Field::Password, args.password);
    check_required(form)?;

    match form.submit_login().await? {
        LoginResult::Accepted => {
            print_screen(form);
            Ok(())
        }
        LoginResult::Rejected(message) => Err(CliError::Failed(message)),
        LoginResult::Unreachable => Err(CliError::Failed("backend unreachable".to_owned())),
    }
}

/// Input-layer validation: required fields must be present before submit.
fn check_required(form: &Form) -> Result<(), CliError> {
    let missing = form.snapshot().missing_required();
    if missing.is_empty() {
        return Ok(());
    }
    let names = missing.iter().map(|f| f.name()).collect::<Vec<_>>();
    Err(CliError::Invalid(names.join(", ")))
}

// =============================================================================
// INTERACTIVE
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Go(Route),
    Mode(AuthMode),
    Set(Field, String),
    Submit,
    WhoAmI,
    Help,
    Quit,
    Nothing,
}

fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "" => Ok(ReplCommand::Nothing),
        "go" => Route::from_path(rest)
            .map(ReplCommand::Go)
            .ok_or_else(|| format!("unknown page `{rest}`")),
        "mode" => match rest {
            "login" => Ok(ReplCommand::Mode(AuthMode::Login)),
            "register" => Ok(ReplCommand::Mode(AuthMode::Register)),
            other => Err(format!("unknown mode `{other}`")),
        },
        "set" => {
            let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
            let field = Field::parse(name).ok_or_else(|| format!("unknown field `{name}`"))?;
            Ok(ReplCommand::Set(field, value.trim().to_owned()))
        }
        "submit" => Ok(ReplCommand::Submit),
        "whoami" => Ok(ReplCommand::WhoAmI),
        "help" => Ok(ReplCommand::Help),
        "quit" | "exit" => Ok(ReplCommand::Quit),
        other => Err(format!("unknown command `{other}`; try `help`")),
    }
}

async fn run_interactive(form: &Form) -> Result<(), CliError> {
    println!("{HELP}\n");
    print_screen(form);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            ReplCommand::Nothing => continue,
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                println!("{HELP}");
                continue;
            }
            ReplCommand::WhoAmI => {
                println!("{}", render_home(&form.session().current_user()));
                continue;
            }
            ReplCommand::Go(route) => form.shell().go(route),
            ReplCommand::Mode(mode) => {
                if let Err(e) = form.switch_mode(mode) {
                    println!("{e}");
                }
            }
            ReplCommand::Set(field, value) => {
                if !form.set_field(field, value) {
                    println!("`{}` is not on this form", field.name());
                }
            }
            ReplCommand::Submit => submit_interactive(form).await,
        }
        print_screen(form);
    }
    Ok(())
}

async fn submit_interactive(form: &Form) {
    if form.shell().route() != Route::Login {
        println!("open the login page first (`go login`)");
        return;
    }
    if let Err(e) = check_required(form) {
        println!("{e}");
        return;
    }

    let outcome = match form.snapshot().mode {
        AuthMode::Login => form.submit_login().await.map(|_| ()),
        AuthMode::Register => form.submit_register().await.map(|_| ()),
    };
    if let Err(e) = outcome {
        println!("{e}");
    }
}

fn print_screen(form: &Form) {
    let route = form.shell().route();
    let body = match route {
        Route::Home => render_home(&form.session().current_user()),
        Route::Login => render_login(&form.snapshot()),
        Route::Contact => render_contact(),
    };
    println!("{}\n\n{body}\n", render_navbar(route));
}
