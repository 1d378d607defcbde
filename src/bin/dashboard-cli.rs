use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use product_dashboard::catalog::{format_usd, Product};
use product_dashboard::dashboard::view::{
    render_modal, render_notice, render_pagination, render_table,
};
use product_dashboard::config::{load_config, ViewConfig};
use product_dashboard::dashboard::{
    DashboardController, DashboardEvent, DashboardSession, ProductApi, ProductForm, ProxyClient,
};
use product_dashboard::observability::logging;

#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(about = "Terminal front end for the product dashboard", long_about = None)]
struct Cli {
    /// Base URL of the running proxy.
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// TOML configuration file; only the `[dashboard]` section is used.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rows per page. Overrides `dashboard.page_size`.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    page_size: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a page of products
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show a single product
    Show { product_id: String },
    /// Add a new product
    Create(CreateArgs),
    /// Edit an existing product; omitted fields keep their current value
    Update {
        product_id: String,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Delete a product (demo only, nothing is removed)
    Delete { product_id: String },
    /// Live search from stdin: one search edit per line, `:page N` to page
    Browse,
}

#[derive(Args)]
struct CreateArgs {
    #[arg(long)]
    title: String,
    /// Price, e.g. 1299.99 or "$1,299.99"
    #[arg(long)]
    price: String,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    image: Option<String>,
}

#[derive(Args)]
struct UpdateArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    image: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging("warn");

    let view = match &cli.config {
        Some(path) => load_config(path)?.dashboard,
        None => ViewConfig::default(),
    };
    let page_size = cli.page_size.unwrap_or(view.page_size);
    let debounce = Duration::from_millis(view.search_debounce_ms);

    let client = ProxyClient::new(&cli.url)?;
    let mut controller = DashboardController::new(client.clone(), page_size);

    match cli.command {
        Commands::List { page, search } => {
            controller.search_input(search.clone());
            controller.apply_debounced_search(search);
            controller.change_page(page);
            controller.fetch_products().await;
        }
        Commands::Show { product_id } => {
            let product = client.get_product(&product_id).await?;
            print_product(&product);
            return Ok(());
        }
        Commands::Create(args) => {
            controller.open_create();
            print_modal(&controller);
            let form = ProductForm {
                title: args.title,
                price: args.price,
                category: args.category.unwrap_or_default(),
                description: args.description.unwrap_or_default(),
                image: args.image.unwrap_or_default(),
            };
            controller.submit_form(form).await;
        }
        Commands::Update { product_id, fields } => {
            let product = client.get_product(&product_id).await?;
            controller.open_edit(product);
            print_modal(&controller);

            let mut form = controller.form().clone();
            overwrite(&mut form.title, fields.title);
            overwrite(&mut form.price, fields.price);
            overwrite(&mut form.category, fields.category);
            overwrite(&mut form.description, fields.description);
            overwrite(&mut form.image, fields.image);
            controller.submit_form(form).await;
        }
        Commands::Delete { product_id } => {
            controller.delete_product(&product_id);
        }
        Commands::Browse => {
            controller = browse(controller, debounce).await?;
        }
    }

    let notices = controller.take_notices();
    for notice in &notices {
        println!("{}", render_notice(notice));
    }

    if controller.page_state().total > 0 || !controller.products().is_empty() {
        println!("{}", render_table(controller.products()));
        println!("{}", render_pagination(controller.page_state()));
    }

    if notices.iter().any(|n| n.is_error()) {
        return Err("dashboard operation failed".into());
    }
    Ok(())
}

async fn browse(
    controller: DashboardController<ProxyClient>,
    debounce: Duration,
) -> Result<DashboardController<ProxyClient>, Box<dyn std::error::Error>> {
    let (tx, rx) = mpsc::channel(32);
    let session = tokio::spawn(DashboardSession::new(controller, debounce).run(rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match line.strip_prefix(":page ") {
            Some(page) => DashboardEvent::ChangePage(page.trim().parse()?),
            None => DashboardEvent::SearchInput(line),
        };
        if tx.send(event).await.is_err() {
            break;
        }
    }

    // a pending search edit is dropped on close, so let the last one fire
    tokio::time::sleep(debounce * 2).await;
    drop(tx);

    Ok(session.await?)
}

fn overwrite(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn print_modal(controller: &DashboardController<ProxyClient>) {
    if let Some(heading) = render_modal(controller.modal()) {
        println!("{heading}");
    }
}

fn print_product(product: &Product) {
    println!("{}", render_table(std::slice::from_ref(product)));
    println!("id:       {}", product.product_id);
    println!("price:    {}", format_usd(product.product_price));
    if let Some(image) = &product.product_image {
        println!("image:    {image}");
    }
    println!("created:  {}", product.created_timestamp);
    println!("updated:  {}", product.updated_timestamp);
}
