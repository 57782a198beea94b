//! forge – writes the GlowBoost FAQ, product and comparison pages.
//!
//! Usage:
//!   forge
//!
//! Documents are written under `output/` in the current directory. Set
//! `RUST_LOG=debug` for per-stage diagnostics on stderr.

use std::{env, process};

use content_forge::pipeline::{run, PipelineConfig};
use content_forge::sample::glowboost_record;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                eprintln!("Unexpected argument: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    match run(&glowboost_record(), &PipelineConfig::default()) {
        Ok(pages) => {
            println!("Generated pages:");
            for (name, path) in pages.iter() {
                println!("{name}: {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("forge – product content page generator (content-forge)");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog}");
    eprintln!();
    eprintln!("Writes output/faq.json, output/product_page.json and");
    eprintln!("output/comparison_page.json for the built-in product record.");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --help         Print this message");
}
