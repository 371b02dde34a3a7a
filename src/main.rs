use clap::{Parser, Subcommand};
use log::debug;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_browser::command::HELP;
use recipe_browser::config::load_config;
use recipe_browser::controller::Controls;
use recipe_browser::query::query_ids;
use recipe_browser::{
    parse_command, BrowserError, Command, Controller, HtmlPainter, Painter, RecipeBrowserBuilder,
    RecipeStore, SortMode, Surface, TerminalPainter,
};

#[derive(Parser)]
#[command(name = "recipe-browser")]
#[command(version, about = "Browse, filter and sort a recipe collection", long_about = None)]
struct Cli {
    /// Recipe document: an http(s) URL or a file path
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Configuration file (default: recipe-browser.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also mirror the page into this HTML file after every command
    #[arg(long)]
    html: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the recipes matching a search and exit
    List {
        /// Text to find in titles and ingredients
        #[arg(short, long, default_value = "")]
        query: String,
        /// Only these cuisines (repeatable)
        #[arg(long)]
        cuisine: Vec<String>,
        /// Only these meals (repeatable)
        #[arg(long)]
        meal: Vec<String>,
        /// relevance, time-asc, time-desc or alpha
        #[arg(long, default_value = "relevance")]
        sort: SortMode,
    },
    /// Print one recipe in full and exit
    Show {
        /// Recipe title
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    if let Some(html) = cli.html {
        config.html_output = Some(html.to_string_lossy().into_owned());
    }
    debug!("{:#?}", config);

    let builder = RecipeBrowserBuilder::from(&config);

    match cli.command {
        None => browse(builder, config.html_output.map(PathBuf::from)).await?,
        Some(Commands::List {
            query,
            cuisine,
            meal,
            sort,
        }) => {
            let store = RecipeStore::with_recipes(builder.load().await?);

            let mut controls = Controls::new(cuisine, meal);
            controls.cuisines.iter_mut().for_each(|cb| cb.checked = true);
            controls.meals.iter_mut().for_each(|cb| cb.checked = true);
            controls.search = query;
            controls.sort = sort;

            let ids = query_ids(store.recipes(), &controls.criteria());
            let mut surface = Surface::new();
            surface.render_list(
                ids.into_iter()
                    .filter_map(|id| store.get(id).map(|recipe| (id, recipe))),
            );
            TerminalPainter::new(std::io::stdout())
                .paint(&surface, &controls)
                .await?;
        }
        Some(Commands::Show { title }) => {
            let store = RecipeStore::with_recipes(builder.load().await?);
            let (id, recipe) = store
                .find_by_title(&title)
                .ok_or(BrowserError::RecipeNotFound(title.clone()))?;

            let mut surface = Surface::new();
            surface.render_detail(id, recipe);
            TerminalPainter::new(std::io::stdout())
                .paint(&surface, &Controls::default())
                .await?;
        }
    }

    Ok(())
}

/// Interactive loop: one command per line, the page is repainted after each.
///
/// The recipe load runs alongside the prompt, so commands are accepted before
/// it completes.
async fn browse(
    builder: RecipeBrowserBuilder,
    html: Option<PathBuf>,
) -> Result<(), BrowserError> {
    let mut controller = builder.pending();

    let mut painters: Vec<Box<dyn Painter>> =
        vec![Box::new(TerminalPainter::new(std::io::stdout()))];
    if let Some(path) = html {
        painters.push(Box::new(HtmlPainter::new(path)));
    }

    println!(
        "Loading recipes from {} (type 'help' for commands)",
        builder.location()
    );
    paint(&controller, &mut painters).await?;

    let load = builder.load();
    tokio::pin!(load);
    let mut loading = true;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        tokio::select! {
            result = &mut load, if loading => {
                loading = false;
                controller.finish_load(result);
                println!();
                paint(&controller, &mut painters).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Dispatch(events)) => {
                        for event in events {
                            controller.handle(event);
                        }
                        paint(&controller, &mut painters).await?;
                    }
                    Ok(Command::Repaint) => paint(&controller, &mut painters).await?,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::Quit) => break,
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    Ok(())
}

async fn paint(
    controller: &Controller,
    painters: &mut [Box<dyn Painter>],
) -> Result<(), BrowserError> {
    for painter in painters.iter_mut() {
        painter
            .paint(controller.surface(), controller.controls())
            .await?;
    }
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}
