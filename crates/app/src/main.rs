use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use server::ServerConfig;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBind { raw: String },
    InvalidQuestionsDir { raw: String },
    InvalidServerUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBind { raw } => write!(f, "invalid --bind value: {raw}"),
            ArgsError::InvalidQuestionsDir { raw } => {
                write!(f, "invalid --questions value: {raw}")
            }
            ArgsError::InvalidServerUrl { raw } => write!(f, "invalid --server-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [serve] [--bind <addr>] [--questions <dir>]");
    eprintln!("  cargo run -p app --features desktop -- ui [--server-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bind {}", ServerConfig::DEFAULT_BIND);
    eprintln!("  --questions {}", ServerConfig::DEFAULT_QUESTIONS_DIR);
    eprintln!("  --server-url {DEFAULT_SERVER_URL}");
    eprintln!();
    eprintln!("Environment (a .env file is read too):");
    eprintln!("  QUIZ_BIND_ADDR, QUIZ_QUESTIONS_DIR, QUIZ_SERVER_URL, RUST_LOG");
}

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Serve,
    Ui,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "serve" => Some(Self::Serve),
            "ui" => Some(Self::Ui),
            _ => None,
        }
    }
}

#[derive(Debug)]
enum Args {
    Serve(ServerConfig),
    Ui { server_url: String },
}

impl Args {
    fn parse_serve(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = ServerConfig::default();
        if let Ok(raw) = std::env::var("QUIZ_BIND_ADDR") {
            config.bind = parse_bind(raw)?;
        }
        if let Ok(raw) = std::env::var("QUIZ_QUESTIONS_DIR") {
            config.questions_dir = parse_questions_dir(raw)?;
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bind" => config.bind = parse_bind(require_value(args, "--bind")?)?,
                "--questions" => {
                    config.questions_dir =
                        parse_questions_dir(require_value(args, "--questions")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self::Serve(config))
    }

    fn parse_ui(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut server_url =
            std::env::var("QUIZ_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server-url" => {
                    let value = require_value(args, "--server-url")?;
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(ArgsError::InvalidServerUrl { raw: value });
                    }
                    server_url = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self::Ui { server_url })
    }
}

fn parse_bind(raw: String) -> Result<SocketAddr, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidBind { raw })
}

fn parse_questions_dir(raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidQuestionsDir { raw });
    }
    Ok(PathBuf::from(raw))
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means serve.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Serve,
        Some("--help" | "-h") => {
            print_usage();
            std::process::exit(0);
        }
        Some(first) if first.starts_with("--") => Command::Serve,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = match cmd {
        Command::Serve => Args::parse_serve(&mut iter),
        Command::Ui => Args::parse_ui(&mut iter),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    Ok(parsed)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match parse_args()? {
        Args::Serve(config) => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::serve(config))?;
            Ok(())
        }
        Args::Ui { server_url } => launch_ui(&server_url),
    }
}

#[cfg(feature = "desktop")]
fn launch_ui(server_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::Arc;

    use dioxus::LaunchBuilder;
    use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
    use services::{HttpQuestionSource, QuizSessionService};
    use ui::{App, UiApp, build_app_context};

    const WINDOW_TITLE: &str = "Data Structures & Python Quiz";

    struct DesktopApp {
        quiz: Arc<QuizSessionService>,
    }

    impl UiApp for DesktopApp {
        fn window_title(&self) -> String {
            WINDOW_TITLE.to_string()
        }

        fn quiz(&self) -> Arc<QuizSessionService> {
            Arc::clone(&self.quiz)
        }
    }

    let source = HttpQuestionSource::new(server_url);
    log::info!("loading questions from {}", source.endpoint());
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz: Arc::new(QuizSessionService::new(Arc::new(source))),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch_ui(_server_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    Err("the ui subcommand needs a build with `--features desktop`".into())
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
