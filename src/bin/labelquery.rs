//! Command-line interface for labelquery
//! This binary parses, evaluates and debugs boolean label queries.
//!
//! Usage:
//!   labelquery tokens `<query>`                         - Print the query tokens
//!   labelquery parse `<query>` [--format `<format>`]    - Print the parsed expression
//!   labelquery eval `<query>` `<word>`...               - Evaluate against a word list
//!   labelquery trace `<query>` `<word>`...              - Print a step-by-step evaluation report
//!   labelquery filter `<query>` [--input `<file>`]      - Print the input lines that match
//!
//! Global flags: --config `<file>`, --exact, --keep-accents

use clap::{Arg, ArgAction, ArgMatches, Command};
use labelquery::query::config::{CliFlags, LabelQueryConfig, Loader, OutputFormat};
use labelquery::query::formats::{to_infix_string, to_json, to_treeviz_str};
use labelquery::query::lexing::tokenize;
use labelquery::query::parsing::to_postfix;
use labelquery::query::pipeline::{CompiledQuery, QueryPipeline};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

const EXIT_FALSE: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn query_arg() -> Arg {
    Arg::new("query")
        .help("Query, e.g. \"ingenieria y (sistemas o software) y no civil\"")
        .required(true)
        .index(1)
}

fn words_arg() -> Arg {
    Arg::new("words")
        .help("Corpus words to evaluate against")
        .num_args(0..)
        .index(2)
}

fn main() {
    env_logger::init();

    let matches = Command::new("labelquery")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and evaluate boolean label queries (y / o / no)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .arg(
            Arg::new("exact")
                .long("exact")
                .help("Terms must equal a whole word instead of occurring inside one")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("keep-accents")
                .long("keep-accents")
                .help("Compare with diacritics intact")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print one token per line")
                .arg(query_arg()),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the parsed expression")
                .arg(query_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: infix, treeviz, json or postfix"),
                ),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate against a word list; exit status 1 when false")
                .arg(query_arg())
                .arg(words_arg()),
        )
        .subcommand(
            Command::new("trace")
                .about("Print a step-by-step evaluation report")
                .arg(query_arg())
                .arg(words_arg()),
        )
        .subcommand(
            Command::new("filter")
                .about("Print the lines whose words satisfy the query")
                .arg(query_arg())
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .help("File with one record per line (default: stdin)"),
                ),
        )
        .get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        unreachable!()
    };

    // Global flags are propagated down, so read them from the subcommand
    let config = load_config(sub).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(EXIT_ERROR);
    });
    let pipeline = QueryPipeline::from_config(&config);

    match name {
        "tokens" => handle_tokens_command(query_of(sub)),
        "parse" => {
            let format = match sub.get_one::<String>("format") {
                Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
                    eprintln!("Unknown format: {}", name);
                    process::exit(EXIT_ERROR);
                }),
                None => config.output.format,
            };
            handle_parse_command(&pipeline, query_of(sub), format);
        }
        "eval" => {
            let query = compile(&pipeline, query_of(sub));
            let result = query.matches(&words_of(sub));
            println!("{}", result);
            if !result {
                process::exit(EXIT_FALSE);
            }
        }
        "trace" => {
            let query = compile(&pipeline, query_of(sub));
            print!("{}", query.explain(&words_of(sub)));
        }
        "filter" => {
            let query = compile(&pipeline, query_of(sub));
            handle_filter_command(&query, sub.get_one::<String>("input"));
        }
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> Result<LabelQueryConfig, config::ConfigError> {
    let flags = CliFlags {
        config_file: matches.get_one::<String>("config").map(PathBuf::from),
        exact: matches.get_flag("exact"),
        keep_accents: matches.get_flag("keep-accents"),
    };
    Loader::new().with_cli_flags(&flags)?.build()
}

fn query_of(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("query")
        .map(String::as_str)
        .unwrap_or_default()
}

fn words_of(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("words")
        .map(|words| words.cloned().collect())
        .unwrap_or_default()
}

fn compile(pipeline: &QueryPipeline, query: &str) -> CompiledQuery {
    pipeline.compile(query).unwrap_or_else(|e| {
        eprintln!("Query error: {}", e);
        process::exit(EXIT_ERROR);
    })
}

/// Handle the tokens command
fn handle_tokens_command(query: &str) {
    let tokens = tokenize(query).unwrap_or_else(|e| {
        eprintln!("Query error: {}", e);
        process::exit(EXIT_ERROR);
    });
    for token in tokens {
        println!("{}", token);
    }
}

/// Handle the parse command
fn handle_parse_command(pipeline: &QueryPipeline, query: &str, format: OutputFormat) {
    let query = compile(pipeline, query);
    let output = match format {
        OutputFormat::Infix => format!("{}\n", to_infix_string(query.tree())),
        OutputFormat::Treeviz => to_treeviz_str(query.tree()),
        OutputFormat::Json => match to_json(query.tree()) {
            Ok(json) => format!("{}\n", json),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                process::exit(EXIT_ERROR);
            }
        },
        OutputFormat::Postfix => {
            // The query already compiled, so these stages cannot fail here
            let postfix = tokenize(query.source())
                .and_then(|tokens| to_postfix(&tokens))
                .unwrap_or_default();
            let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
            format!("{}\n", rendered.join(" "))
        }
    };
    print!("{}", output);
}

/// Handle the filter command
fn handle_filter_command(query: &CompiledQuery, input: Option<&String>) {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error reading file: {}", e);
                process::exit(EXIT_ERROR);
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut kept = 0usize;
    for line in reader.lines() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("Error reading input: {}", e);
            process::exit(EXIT_ERROR);
        });
        if query.matches_text(&line) {
            println!("{}", line);
            kept += 1;
        }
    }
    log::info!("{} records matched {:?}", kept, query.source());
}
