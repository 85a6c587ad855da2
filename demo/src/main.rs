//! mapmut demo - runs the reference scenarios and prints their results.

use std::env;
use std::process;

use mapmut_core::Value;
use mapmut_demo::{format_result, logging, print_help, reference_scenarios, run_all, sample_mapping, DemoConfig};

fn main() {
    let config = match DemoConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            process::exit(2);
        }
    };

    if config.show_help {
        print_help();
        return;
    }

    logging::init(&config);

    let target = Value::Map(sample_mapping());
    println!("Original: {}", target);

    let reports = run_all(&target, &reference_scenarios());
    for (i, report) in reports.iter().enumerate() {
        println!("{}. {}: {}", i + 1, report.name, format_result(&report.result));
    }

    println!("Original after all scenarios: {}", target);

    let failures: Vec<_> = reports.iter().filter_map(|r| r.verdict.as_ref().err()).collect();
    if !failures.is_empty() {
        for failure in failures {
            eprintln!("Error: {}", failure);
        }
        process::exit(1);
    }
}
