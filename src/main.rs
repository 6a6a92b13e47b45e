use clap::{Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "mdlstyle", version, about, long_about = None)]
pub struct Cli {
    /// Suppress informational messages
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check style files for syntax and configuration problems
    Check {
        /// Style files to check
        #[arg(required = true)]
        paths: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Rewrite style files in canonical form
    Fmt {
        /// Style files to format
        #[arg(required = true)]
        paths: Vec<String>,

        /// Report files that would change without rewriting them
        #[arg(long)]
        check: bool,

        /// Print the formatted text instead of writing files
        #[arg(long)]
        stdout: bool,
    },
    /// Show the effective rule selection of a style file
    Resolve {
        /// Style file to resolve
        path: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// List known rules
    Rules {
        /// Only list rules carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Show reference information for one rule
    Explain {
        /// Rule id or alias (e.g. MD013 or line-length)
        rule: String,
    },
    /// Convert a markdownlint or rumdl config into a style file
    Import {
        /// Config file to convert (.json, .jsonc, .yaml, .yml or .toml)
        file: String,

        /// Where to write the style file (default: style.rb)
        #[arg(short, long)]
        output: Option<String>,

        /// Print the converted style instead of writing a file
        #[arg(long)]
        dry_run: bool,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
    /// Render a style file as a markdownlint or rumdl config
    Export {
        /// Style file to render
        file: String,

        /// Target format: markdownlint or rumdl
        #[arg(short, long, default_value = "markdownlint")]
        format: String,

        /// Where to write the config (default depends on the format)
        #[arg(short, long)]
        output: Option<String>,

        /// Print the rendered config instead of writing a file
        #[arg(long)]
        dry_run: bool,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
    /// Create a starter style file
    Init {
        /// Where to write it (default: style.rb)
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (auto-detected from $SHELL if omitted)
        shell: Option<Shell>,

        /// List available shells
        #[arg(long)]
        list: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Check { paths, output } => commands::check::handle_check(&paths, &output, cli.quiet),
        Commands::Fmt { paths, check, stdout } => commands::fmt::handle_fmt(&paths, check, stdout, cli.quiet),
        Commands::Resolve { path, output } => commands::resolve::handle_resolve(&path, &output),
        Commands::Rules { tag, output } => commands::rules::handle_rules(tag.as_deref(), &output),
        Commands::Explain { rule } => commands::explain::handle_explain(&rule),
        Commands::Import {
            file,
            output,
            dry_run,
            force,
        } => commands::import::handle_import(&file, output.as_deref(), dry_run, force),
        Commands::Export {
            file,
            format,
            output,
            dry_run,
            force,
        } => commands::export::handle_export(&file, &format, output.as_deref(), dry_run, force),
        Commands::Init { path, force } => commands::init::handle_init(path.as_deref(), force, cli.quiet),
        Commands::Completions { shell, list } => commands::completions::handle_completions(shell, list),
    }
}
