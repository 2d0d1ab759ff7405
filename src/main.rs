use clap::Parser;
use contact_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Contact Processor - Contact-Center and Helpdesk CSV Analytics");
    println!("=============================================================");
    println!();
    println!("Convert contact-center and helpdesk CSV exports into normalized");
    println!("records and aggregate analytics.");
    println!();
    println!("USAGE:");
    println!("    contact-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze an export and report analytics (main command)");
    println!("    schema      Inspect an export's detected kind and column bindings");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze a call-center export:");
    println!("    contact-processor analyze calls.csv");
    println!();
    println!("    # Emit the full result as JSON for downstream storage:");
    println!("    contact-processor analyze tickets.csv --format json --output result.json");
    println!();
    println!("    # Check which headers bound to which canonical fields:");
    println!("    contact-processor schema calls.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    contact-processor <COMMAND> --help");
}
