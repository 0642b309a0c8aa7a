use anyhow::Result;
use quotidie::context::StandardContext;
use quotidie::{cli, controller, scheduler};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let binary_name = args
        .first()
        .and_then(|p| {
            PathBuf::from(p)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "quotidie".to_string());

    let mut show_now = false;
    let mut install: Option<String> = None;
    let mut root: Option<PathBuf> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => {
                cli::print_help(&binary_name);
                return Ok(());
            }
            "--now" => show_now = true,
            "--install" => {
                let Some(value) = iter.next() else {
                    eprintln!("--install requires a time argument (HH:MM)");
                    std::process::exit(2);
                };
                install = Some(value.clone());
            }
            "--root" | "-r" => {
                let Some(value) = iter.next() else {
                    eprintln!("--root requires a directory argument");
                    std::process::exit(2);
                };
                root = Some(PathBuf::from(value));
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run '{} --help' for usage.", binary_name);
                std::process::exit(2);
            }
        }
    }

    let ctx = StandardContext::new(root);

    // No intent at all means "show a quote now". When both intents are
    // given, both run and the installer's code wins.
    let mut rc = 0;
    if show_now || install.is_none() {
        rc = controller::show_now(&ctx)?;
    }
    if let Some(hhmm) = &install {
        rc = scheduler::install_daily(hhmm);
    }

    std::process::exit(rc)
}

fn init_logging() {
    let level = env::var("QUOTIDIE_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(log::LevelFilter::Warn);
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
