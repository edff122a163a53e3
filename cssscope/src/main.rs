use clap::Parser;
use cssscope_lib::{scope_file, ScopeOptions, ScopePrefix};
use log::LevelFilter;
use std::path::PathBuf;

const CSSSCOPE_INTRO: &str = r#"
    cssscope - keep every rule of a stylesheet inside one wrapper class
"#;

#[derive(Parser)]
#[command(name = "cssscope")]
#[command(about = "Prefix CSS selectors with a wrapper class to avoid style leakage")]
struct Args {
    /// Stylesheet to rewrite in place.
    file: PathBuf,

    /// Wrapper class, with or without the leading dot (e.g. `dashboard`).
    scope: ScopePrefix,

    /// Do not write a `.backup` copy of the original file.
    #[arg(long)]
    no_backup: bool,

    /// Print the scoped CSS instead of writing any file.
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    // parse the args given in terminal
    let args: Args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let options = ScopeOptions {
        backup: !args.no_backup,
        dry_run: args.dry_run,
    };

    if args.dry_run {
        eprintln!("{}", CSSSCOPE_INTRO);
    } else {
        println!("{}", CSSSCOPE_INTRO);
    }

    match scope_file(&args.file, &args.scope, options) {
        Ok(outcome) if args.dry_run => {
            print!("{}", outcome.scoped_css);
        }
        Ok(outcome) => {
            if let Some(backup) = &outcome.backup_path {
                println!("Backup created: {}", backup.display());
            }
            println!(
                "Scope '{}' applied to {} ({} selectors rewritten)",
                args.scope,
                args.file.display(),
                outcome.report.rewritten
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
