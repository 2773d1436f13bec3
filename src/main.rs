use clap::{Parser as ClapParser, Subcommand};
use orientqb::cli::{self, CliError, IndexOrder, LiteralOptions, TargetOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "oqb")]
#[command(about = "orientqb - render OrientDB literals and query targets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON value as a query literal
    Literal {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Double '%' for use inside a projection template
        #[arg(short, long)]
        template: bool,
    },

    /// Print a FROM target
    Target {
        /// Class names
        classes: Vec<String>,

        /// Cluster id
        #[arg(long)]
        cluster: Option<i32>,

        /// Index name, for an index-values target
        #[arg(long)]
        index: Option<String>,

        /// Index ordering
        #[arg(long, value_enum)]
        order: Option<IndexOrder>,

        /// Statement text to wrap as a subquery
        #[arg(long)]
        nested: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Literal { input, template } => run_literal(input, template),
        Commands::Target {
            classes,
            cluster,
            index,
            order,
            nested,
        } => {
            let options = TargetOptions {
                classes,
                cluster,
                index,
                order,
                nested,
            };
            cli::execute_target(&options).map(|target| println!("{}", target))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_literal(input: Option<String>, template: bool) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = LiteralOptions { input, template };
    println!("{}", cli::execute_literal(&options)?);
    Ok(())
}
