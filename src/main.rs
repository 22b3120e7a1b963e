// Monkey: tokenizer and Pratt parser shell

mod repl;

use std::fs;
use std::io;
use std::path::Path;

use repl::Mode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("monkey");

    let mut mode = Mode::Tree;
    let mut file: Option<&str> = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tokens" => mode = Mode::Tokens,
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            opt if opt.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", opt);
                print_usage(program_name);
                std::process::exit(1);
            }
            path if file.is_none() => file = Some(path),
            _ => {
                eprintln!("Error: More than one input file provided");
                print_usage(program_name);
                std::process::exit(1);
            }
        }
    }

    match file {
        Some(path) => run_file(path, mode)?,
        None => {
            let user = std::env::var("USER").unwrap_or_else(|_| "there".to_string());
            println!("Hello {}! This is the Monkey programming language!", user);
            println!("Feel free to type in commands");
            repl::start(mode)?;
        }
    }

    Ok(())
}

fn run_file(path: &str, mode: Mode) -> Result<(), Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        std::process::exit(1);
    }

    let source = fs::read_to_string(path)?;
    log::info!("parsing {} ({} bytes)", path, source.len());

    let mut stdout = io::stdout().lock();
    if !repl::run_source(&source, &mut stdout, mode)? {
        std::process::exit(1);
    }
    Ok(())
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--tokens] [file.monkey]", program_name);
    eprintln!();
    eprintln!("Without a file, starts an interactive session on stdin.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tokens    Print the token stream instead of the syntax tree");
    eprintln!("  -h, --help  Show this message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace parser diagnostics as they are recorded.");
}
