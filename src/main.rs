use catalog_filter::application::engine::{CatalogEngine, FEATURED_LIMIT, featured_products};
use catalog_filter::domain::contact::{ContactMessage, DEFAULT_RECIPIENT};
use catalog_filter::domain::filter::{CategoryFilter, FilterState, PriceRange, SortKey};
use catalog_filter::domain::ports::ProductSourceBox;
use catalog_filter::domain::product::Product;
use catalog_filter::infrastructure::json_file::{JsonFileProductSource, load_or_empty};
use catalog_filter::interfaces::csv::product_writer::ProductWriter;
use catalog_filter::interfaces::display::{count_label, render_cards, render_featured};
use catalog_filter::telemetry;
use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter, search and sort the catalog
    Browse {
        /// Products JSON file
        input: PathBuf,

        /// Category to show, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Inclusive price range as MIN-MAX, or "all"
        #[arg(long, default_value = "all")]
        price_range: String,

        /// Hide products that are out of stock
        #[arg(long)]
        in_stock_only: bool,

        /// Case-insensitive text matched against name, description and category
        #[arg(long, default_value = "")]
        search: String,

        /// One of price-low, price-high, name; anything else sorts by id
        #[arg(long, default_value = "default")]
        sort: String,

        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Show the first products of the catalog, as on the landing page
    Featured {
        /// Products JSON file
        input: PathBuf,

        #[arg(long, default_value_t = FEATURED_LIMIT)]
        limit: usize,

        #[arg(long, value_enum, default_value_t = Format::Cards)]
        format: Format,
    },
    /// Compose a mailto link for a contact-form enquiry
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        /// Recipient address
        #[arg(long, default_value = DEFAULT_RECIPIENT)]
        to: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
    Cards,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Browse {
            input,
            category,
            price_range,
            in_stock_only,
            search,
            sort,
            format,
        } => {
            let products = load(input).await;
            let mut engine = CatalogEngine::new(products);
            let sort_key = sort.parse::<SortKey>().unwrap_or_default();
            engine.set_state(FilterState {
                category: CategoryFilter::parse(&category),
                price_range: PriceRange::parse(&price_range),
                in_stock_only,
                search_term: search,
                sort_key,
            });

            eprintln!("{}", count_label(engine.len()));
            write_view(engine.view(), format, render_cards)?;
        }
        Command::Featured {
            input,
            limit,
            format,
        } => {
            let products = load(input).await;
            write_view(
                featured_products(&products, limit),
                format,
                render_featured,
            )?;
        }
        Command::Contact {
            name,
            email,
            phone,
            subject,
            message,
            to,
        } => {
            let message = ContactMessage {
                name,
                email,
                phone,
                subject,
                message,
            };
            let link = message.mailto_link(&to).into_diagnostic()?;
            println!("{link}");
        }
    }

    Ok(())
}

async fn load(input: PathBuf) -> Vec<Product> {
    let source: ProductSourceBox = Box::new(JsonFileProductSource::new(input));
    load_or_empty(source.as_ref()).await
}

fn write_view(
    products: &[Product],
    format: Format,
    cards: fn(&[Product]) -> String,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Csv => {
            let mut writer = ProductWriter::new(out);
            writer.write_products(products).into_diagnostic()?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, products).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
        Format::Cards => {
            writeln!(out, "{}", cards(products)).into_diagnostic()?;
        }
    }
    Ok(())
}
