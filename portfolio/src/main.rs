use clap::{Args, Parser, Subcommand};
use portfolio::{
    navigate, render_showcase, run_hero, submit_contact, write_default_site, ContactFields,
    HeroOptions, NavAction, Settings, SubmitOutcome,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Portfolio site engine", long_about = None)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Site content file (defaults to <config dir>/portfolio/site.toml, then built-in content)"
    )]
    site: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "OTLP endpoint for site metrics (e.g., http://localhost:4318)"
    )]
    otlp_endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate the hero headline in the terminal
    Hero {
        #[arg(long, help = "Stop after N passes over the role list")]
        cycles: Option<u64>,

        #[arg(long, default_value_t = 0, help = "Index of the first role")]
        start: usize,

        #[arg(long, help = "Do not print the full role next to the headline")]
        hide_role: bool,
    },
    /// Send a message through the contact form
    Contact(ContactArgs),
    /// Replay navigation actions against the page sections
    Nav {
        #[arg(
            value_name = "ACTION",
            required = true,
            value_parser = parse_nav_action,
            help = "goto:<id>, click:<id>, hire, projects, menu or scroll:<px>"
        )]
        actions: Vec<NavAction>,
    },
    /// Print profile, skills and projects
    Showcase,
    /// Write the built-in site content to a TOML file for editing
    Init {
        #[arg(long, value_name = "PATH", help = "Destination (defaults to the --site location)")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ContactArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long)]
    message: String,

    #[arg(long, help = "Print the mailto: URI instead of opening the mail client")]
    dry_run: bool,
}

impl From<ContactArgs> for ContactFields {
    fn from(args: ContactArgs) -> Self {
        ContactFields {
            name: args.name,
            email: args.email,
            phone: args.phone,
            message: args.message,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings {
        site_path: cli.site,
        otlp_endpoint: cli.otlp_endpoint,
    };

    match cli.command {
        Command::Hero {
            cycles,
            start,
            hide_role,
        } => {
            let options = HeroOptions {
                cycles,
                start_index: start,
                hide_role,
            };
            let snapshot = run_hero(settings, options).await?;
            println!(
                "Stopped on \"{}\" after {} roles",
                snapshot.role, snapshot.roles_completed
            );
        }
        Command::Contact(args) => {
            let dry_run = args.dry_run;
            let outcome = submit_contact(settings, args.into(), dry_run).await?;
            if let Some(notice) = outcome.notice() {
                println!("{notice}");
            }
            if let SubmitOutcome::Failed { reason, .. } = outcome {
                anyhow::bail!("contact dispatch failed: {reason}");
            }
        }
        Command::Nav { actions } => {
            let report = navigate(&settings, &actions)?;
            for record in &report.scrolls {
                println!("scrolled to {} ({:?})", record.section.anchor(), record.behavior);
            }
            for section in &report.ignored {
                println!("no section {}, ignored", section.anchor());
            }
            println!(
                "header: {}  mobile menu: {}",
                report.header,
                if report.mobile_menu_open { "open" } else { "closed" }
            );
        }
        Command::Showcase => {
            println!("{}", render_showcase(&settings).await?);
        }
        Command::Init { output } => {
            let target = output.or(settings.site_path);
            let path = write_default_site(target.as_deref()).await?;
            println!("Site config written to {}", path.display());
        }
    }

    Ok(())
}

fn parse_nav_action(value: &str) -> Result<NavAction, String> {
    value.parse()
}
