mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use skillcheck::{config, output, rules, runner};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            format,
            output: output_path,
            config: config_path,
        } => {
            let config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let root = config.resolve_root(path);
            let report = runner::run(&root, &config).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let formatted = output::format_run(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.all_passed() { 0 } else { 1 });
        }

        Commands::ListRules => {
            let rules = rules::all_rules();
            println!("{}", "Built-in Rules".bold().underline());
            println!();

            let mut current_group = "";
            for rule in &rules {
                if rule.group != current_group {
                    if !current_group.is_empty() {
                        println!();
                    }
                    println!("  {}", rule.group.bold());
                    current_group = rule.group;
                }

                let severity = match rule.severity {
                    "fail" => "FAIL".red().bold().to_string(),
                    "warn" => "WARN".yellow().bold().to_string(),
                    _ => rule.severity.to_string(),
                };

                println!(
                    "    [{severity}] {id:<30} {message}",
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }

        Commands::Explain { rule_id } => {
            let rules = rules::all_rules();
            match rules.iter().find(|r| r.id == rule_id) {
                Some(rule) => {
                    println!("{}", rule.id.bold());
                    println!();
                    println!("  Group:        {}", rule.group);
                    println!("  Severity:     {}", rule.severity);
                    println!("  Description:  {}", rule.message);
                    println!("  Remediation:  {}", rule.remediation);
                }
                None => {
                    eprintln!("Unknown rule: {rule_id}");
                    eprintln!("Use 'skillcheck list-rules' to see all available rules.");
                    std::process::exit(2);
                }
            }
        }
    }
}
