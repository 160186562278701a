use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mdsite::Config;
use mdsite::site;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Convert Markdown pages into a static HTML site")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the whole site
    Build {
        /// Config file (missing file means defaults)
        #[arg(short, long, default_value = "mdsite.toml")]
        config: PathBuf,

        /// Markdown source directory
        #[arg(long)]
        content: Option<PathBuf>,

        /// Static asset directory
        #[arg(long = "static")]
        static_dir: Option<PathBuf>,

        /// Output directory
        #[arg(long)]
        public: Option<PathBuf>,

        /// Page template
        #[arg(long)]
        template: Option<PathBuf>,

        /// Prefix for root-relative links, e.g. /blog/
        #[arg(long)]
        base_path: Option<String>,
    },

    /// Convert a single Markdown file
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the converted body, without a page template
        #[arg(long)]
        fragment: bool,

        /// Page template
        #[arg(long, conflicts_with = "fragment")]
        template: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Build {
            config,
            content,
            static_dir,
            public,
            template,
            base_path,
        } => {
            let mut config = Config::load(&config)?;
            if let Some(content) = content {
                config.content_dir = content;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }
            if let Some(public) = public {
                config.public_dir = public;
            }
            if template.is_some() {
                config.template = template;
            }
            if let Some(base_path) = base_path {
                config.base_path = base_path;
            }

            let report = site::build(&config)?;
            log::info!(
                "Built {} pages and copied {} static files into {}",
                report.pages.len(),
                report.static_files,
                config.public_dir.display()
            );
        }
        Command::Render {
            input,
            output,
            fragment,
            template,
        } => {
            let markdown = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;

            let html = if fragment {
                mdsite::markdown_to_html(&markdown)
            } else {
                let template = site::load_template(template.as_deref())?;
                site::render_page(&markdown, &template, "/")
            }
            .with_context(|| format!("converting {}", input.display()))?;

            match output {
                Some(output) => {
                    fs::write(&output, html)
                        .with_context(|| format!("writing {}", output.display()))?;
                    log::info!("Created {}", output.display());
                }
                None => println!("{html}"),
            }
        }
    }
    Ok(())
}
