//! divercite-agent -- plays one self-play match of Divercité.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config FILE         Agent configuration (JSON) for the first seat
//!   --opponent KIND       `random` (default) or `search`
//!   --opponent-config F   Configuration for a `search` opponent
//!   --random-opening N    Random placements before searching (default: 0)
//!   --seed N              Random seed, 0 for entropy (default: 0)
//!   --output FILE         Write the JSON match record here (default: stdout)
//!   --quiet               Suppress the summary
//!
//! Library logging is controlled with `RUST_LOG`.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use divercite_agent::config::AgentConfig;
use divercite_agent::selfplay::{self, MatchConfig, Opponent};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = MatchConfig::default();
    let mut opponent_search = false;
    let mut opponent_config = AgentConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config.agent = load_config(arg_value(&args, i));
            }
            "--opponent" => {
                i += 1;
                opponent_search = match arg_value(&args, i) {
                    "search" => true,
                    "random" => false,
                    other => fail(&format!("invalid --opponent value: {}", other)),
                };
            }
            "--opponent-config" => {
                i += 1;
                opponent_config = load_config(arg_value(&args, i));
            }
            "--random-opening" => {
                i += 1;
                config.random_opening = arg_value(&args, i)
                    .parse()
                    .unwrap_or_else(|_| fail("invalid --random-opening value"));
            }
            "--seed" => {
                i += 1;
                config.seed = arg_value(&args, i)
                    .parse()
                    .unwrap_or_else(|_| fail("invalid --seed value"));
            }
            "--output" => {
                i += 1;
                output_path = Some(arg_value(&args, i).to_string());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    if opponent_search {
        config.opponent = Opponent::Search(opponent_config);
    }

    if !quiet {
        eprintln!(
            "Self-play: budget {}s, bonus {}, opponent {}, {} random opening placements",
            config.agent.total_time_budget_secs,
            config.agent.divercite_bonus,
            if opponent_search { "search" } else { "random" },
            config.random_opening
        );
    }

    let start = Instant::now();
    let record = match selfplay::play_match(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let written = match output_path {
        Some(path) => {
            let file = File::create(&path).unwrap_or_else(|e| {
                fail(&format!("failed to create {}: {}", path, e))
            });
            let mut out = BufWriter::new(file);
            selfplay::write_record_json(&record, &mut out).and_then(|_| out.flush())
        }
        None => selfplay::write_record_json(&record, &mut io::stdout().lock()),
    };
    if let Err(e) = written {
        eprintln!("Error writing match record: {}", e);
        std::process::exit(1);
    }

    if !quiet {
        eprintln!("Match finished in {:.1}s", start.elapsed().as_secs_f64());
        selfplay::print_summary(&record);
    }
}

fn arg_value(args: &[String], i: usize) -> &str {
    match args.get(i) {
        Some(v) => v.as_str(),
        None => fail(&format!("missing value for {}", args[i - 1])),
    }
}

fn load_config(path: &str) -> AgentConfig {
    AgentConfig::load(Path::new(path)).unwrap_or_else(|e| fail(&e.to_string()))
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    print_usage();
    std::process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: divercite-agent [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE         Agent configuration (JSON) for the first seat");
    eprintln!("  --opponent KIND       random (default) or search");
    eprintln!("  --opponent-config F   Configuration for a search opponent");
    eprintln!("  --random-opening N    Random placements before searching (default: 0)");
    eprintln!("  --seed N              Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE         Write the JSON match record here (default: stdout)");
    eprintln!("  --quiet               Suppress the summary");
}
