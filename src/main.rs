mod cli;
mod commands;
mod utils;

use clap::Parser;
use haplogrep_wrapper::config::Config;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = cli::Args::parse();
    init_logging(args.verbose);

    let config = Config::load();
    let haplogrep = args.haplogrep.as_deref();

    let result = match args.command {
        cli::Commands::Classify {
            input,
            output,
            options,
            json,
        } => commands::classify::run(&config, haplogrep, input, output, options, json),
        cli::Commands::Batch {
            inputs,
            output_dir,
            options,
            json,
        } => commands::batch::run(&config, haplogrep, inputs, output_dir, options, json),
        cli::Commands::Trees { known } => commands::trees::run(&config, haplogrep, known),
        cli::Commands::Show { output_file, lines } => commands::show::run(output_file, lines),
        cli::Commands::Analyze {
            vcf,
            tree,
            metric,
            no_extend_report,
            hits,
            het_level,
            keep_files,
        } => commands::analyze::run(
            &config,
            haplogrep,
            vcf,
            haplogrep_wrapper::form::FormSettings {
                tree: tree.unwrap_or_else(|| config.default_tree.clone()),
                metric,
                extend_report: !no_extend_report,
                hits,
                het_level,
                keep_files,
            },
        ),
        cli::Commands::Config {
            executable,
            default_tree,
            java,
            upload_dir,
            results_dir,
        } => commands::config::run(
            config.clone(),
            commands::config::ConfigUpdate {
                executable,
                default_tree,
                java,
                upload_dir,
                results_dir,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
