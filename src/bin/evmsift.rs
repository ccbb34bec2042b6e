// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::error::Error;
use std::fs;

use clap::{arg, Arg, ArgMatches, Command};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
//
use evmsift::analysis::{analyze, AnalysisOptions};
use evmsift::report;
use evmsift::util::{FromBitString, FromHexString};

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let matches = Command::new("evmsift")
        .about("EvmSift Tool")
        .version("0.1.0")
        .subcommand_required(true)
        .arg(arg!(--verbose "Show verbose output"))
        .subcommand(
            Command::new("analyze")
                .about("Classify each byte of a legacy contract as code or data")
                .arg(Arg::new("code").short('c').long("code").help("Read bytecode from the argument itself"))
                .arg(Arg::new("bits").short('b').long("bits").help("Treat the input as a bit string rather than hex"))
                .arg(
                    Arg::new("threshold")
                        .short('t')
                        .long("threshold")
                        .takes_value(true)
                        .help("Share of jump destinations the entrance search must reach"),
                )
                .arg(
                    Arg::new("report")
                        .short('r')
                        .long("report")
                        .takes_value(true)
                        .help("Write the report to a file instead of stdout"),
                )
                .arg(Arg::new("target").required(true))
                .visible_alias("a"),
        )
        .get_matches();
    // Route entrance-search progress and the analysis summary to the
    // console when asked for.
    if matches.is_present("verbose") {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{l} {m}{n}")))
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .build(Root::builder().appender("stdout").build(LevelFilter::Debug))?;
        log4rs::init_config(config)?;
    }
    // Dispatch on outcome
    let ok = match matches.subcommand() {
        Some(("analyze", args)) => run_analyze(args),
        _ => unreachable!(),
    }?;
    // Determine appropriate exit code
    let exitcode = if ok { 0 } else { 1 };
    // Done
    std::process::exit(exitcode);
}

/// Analyze a given bytecode sequence.
fn run_analyze(args: &ArgMatches) -> Result<bool, Box<dyn Error>> {
    let mut input = String::new();
    // Determine analysis target
    let target = args.get_one::<String>("target").unwrap();
    // Decide whether bytecode provided directly, or via a file.
    if args.contains_id("code") {
        // Provided directly
        input.push_str(target);
    } else {
        // Read from file
        let context = fs::read_to_string(target)?;
        // Read all lines of file
        for l in context.lines() {
            input.push_str(l.trim());
        }
    }
    // Parse input string into bytes
    let bytes = if args.contains_id("bits") {
        input.from_bit_string()?
    } else {
        input.from_hex_string()?
    };
    // Construct analysis options
    let mut options = AnalysisOptions::default();
    if let Some(t) = args.get_one::<String>("threshold") {
        options.stop_threshold = t.parse()?;
    }
    if let Some(p) = args.get_one::<String>("report") {
        options.report_path = Some(p.into());
    }
    // Run the analysis
    let analysis = analyze(&bytes, &options)?;
    // Print the report (unless redirected to a file)
    if options.report_path.is_none() {
        let mut stdout = std::io::stdout();
        report::write_report(&mut stdout, &analysis)?;
    }
    //
    Ok(true)
}
