//! resinfo - inspect Kubernetes-style API resource descriptors

use anyhow::Result;
use clap::Parser;
use resinfo::cli::{Cli, Command};
use resinfo::{commands, config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    setup_tracing(cli.verbose);

    // Handle color settings
    if cli.no_color {
        owo_colors::set_override(false);
    }

    if let Command::Completions(ref args) = cli.command {
        generate_completions(args.shell);
        return Ok(());
    }

    let result = config::load_config(cli.config.as_deref())
        .and_then(|cfg| cfg.build_registry())
        .and_then(|registry| match cli.command {
            Command::List => commands::list_resources(&registry, cli.output),
            Command::Names => Ok(commands::list_names(&registry)),
            Command::Show(ref args) => {
                commands::show_resource(&registry, &args.resource_type, cli.output)
            }
            Command::Path(ref args) => commands::storage_path(
                &registry,
                &args.resource_type,
                args.subresource.as_deref(),
            ),
            Command::NotFound(ref args) => {
                commands::not_found_status(&registry, &args.resource_type, &args.name, cli.output)
            }
            Command::Completions(_) => Ok(String::new()),
        });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "resinfo", &mut std::io::stdout());
}
