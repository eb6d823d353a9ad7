use anyhow::{bail, Context, Result};
use pathkit::{
    config::{load_config, resolve_config_path, ToolConfig},
    core::{basename, dirname, get_all_files_under, join_path, normalize_path, read_from},
    observability::{init_logging, shutdown_logging},
    platform::native::file_ops::{read_file, write_file_bytes},
};
use std::io::{Read, Write};
use tracing::{debug, info};

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let explicit_config = if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            bail!("--config requires a file argument");
        }
        let path = args.remove(1);
        args.remove(0);
        Some(path)
    } else {
        None
    };

    let config_path = resolve_config_path(explicit_config.as_deref());
    let config = load_config(&config_path).context("Failed to load configuration")?;

    init_logging(
        &config.log_level,
        config.log_directory.as_deref(),
        config.log_rotation.into(),
    )?;

    info!("pathkit v{}", env!("CARGO_PKG_VERSION"));
    if config_path.exists() {
        debug!("Configuration loaded from: {}", config_path.display());
    } else {
        debug!("No config at {}, using defaults", config_path.display());
    }

    let result = run(&args, &config);
    shutdown_logging();
    result
}

fn run(args: &[String], config: &ToolConfig) -> Result<()> {
    let Some(command) = args.first() else {
        print_help();
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "normalize" => {
            for path in rest {
                println!("{}", normalize_path(path));
            }
        }
        "join" => {
            let [a, b] = expect_args::<2>(command, rest)?;
            println!("{}", join_path(a, b));
        }
        "dirname" => {
            let [path] = expect_args::<1>(command, rest)?;
            println!("{}", dirname(path));
        }
        "basename" => {
            let [path] = expect_args::<1>(command, rest)?;
            println!("{}", basename(path));
        }
        "files" => {
            let [dir] = expect_args::<1>(command, rest)?;
            let mut files = Vec::new();
            get_all_files_under(dir, &mut files);
            if config.sort_files {
                files.sort();
            }
            info!("Found {} files under {}", files.len(), dir);
            for file in &files {
                println!("{}", file);
            }
        }
        "cat" => {
            let (file, max_size) = match rest {
                [file] => (file, config.read_limit),
                [file, max] => (
                    file,
                    max.parse::<usize>()
                        .with_context(|| format!("Invalid byte limit: {}", max))?,
                ),
                _ => bail!("Usage: pathkit cat <file> [max-bytes]"),
            };
            let mut content = Vec::new();
            if !read_file(file, &mut content, max_size) {
                bail!("Failed to read {}", file);
            }
            std::io::stdout()
                .write_all(&content)
                .context("Failed to write to stdout")?;
        }
        "write" => {
            let [file] = expect_args::<1>(command, rest)?;
            let mut stdin = std::io::stdin().lock();
            let mut content = Vec::new();
            if !read_from(|buf| stdin.read(buf), &mut content, 0) {
                bail!("Failed to read standard input");
            }
            if !write_file_bytes(&content, file) {
                bail!("Failed to write {}", file);
            }
            info!("Wrote {} bytes to {}", content.len(), file);
        }
        "--help" | "-h" | "help" => print_help(),
        other => bail!("Unknown command: {}\n\nRun 'pathkit --help' for usage", other),
    }

    Ok(())
}

fn expect_args<'a, const N: usize>(command: &str, rest: &'a [String]) -> Result<[&'a str; N]> {
    if rest.len() != N {
        bail!("'{}' takes {} argument(s), got {}", command, N, rest.len());
    }
    Ok(std::array::from_fn(|i| rest[i].as_str()))
}

fn print_help() {
    println!("pathkit v{} - path and stream utilities", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("  pathkit [--config FILE] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("  normalize <PATH>...         Resolve '.', '..' and repeated '/'");
    println!("  join <A> <B>                Join two paths");
    println!("  dirname <PATH>              Directory part of a path");
    println!("  basename <PATH>             Final element of a path");
    println!("  files <DIR>                 List every file below a directory");
    println!("  cat <FILE> [MAX_BYTES]      Print a file, optionally truncated");
    println!("  write <FILE>                Copy standard input into a file");
    println!("  --help                      Show this help");
    println!();
    println!("CONFIG:");
    println!("  --config FILE, else $PATHKIT_CONFIG, else ./pathkit.json (optional)");
    println!();
    println!("EXAMPLE CONFIG:");
    println!("{}", get_example_config());
}

fn get_example_config() -> &'static str {
    r#"{
  "log_level": "info",
  "log_directory": "./logs",
  "log_rotation": { "type": "daily" },
  "read_limit": 1048576,
  "sort_files": true
}"#
}
