//! Headless demo: drives the search and moderation controllers against
//! the in-memory backend and prints the observed state transitions.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use tokio::sync::watch;

use souk::backend::ports::{ProductRepository, SellerRepository};
use souk::backend::InMemoryBackend;
use souk::config::AppConfig;
use souk::domain::{
    Category, Product, ProductId, ProductStatus, SellerProfile, SellerStatus, UserId,
};
use souk::mvi::UiState;
use souk::screens::moderation::{ModerationController, ModerationIntent};
use souk::screens::product_search::{ProductSearchController, ProductSearchIntent};
use souk::telemetry;

#[derive(Parser)]
#[command(name = "souk", about = "Headless demo of the souk screen controllers")]
struct Cli {
    /// JSON file with extra seed products
    /// ([{"title", "description", "price_cents", "category"}]).
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Query typed into the search screen.
    #[arg(long, default_value = "desk lamp")]
    query: String,
}

#[derive(Debug, Deserialize)]
struct SeedProduct {
    title: String,
    #[serde(default)]
    description: String,
    price_cents: u64,
    #[serde(default)]
    category: Category,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();
    let config = AppConfig::load().context("loading config")?;

    let backend = Arc::new(InMemoryBackend::new());
    let admin = UserId::generate();
    backend.sign_in(admin);
    seed(&backend, cli.seed.clone())?;

    run_search(&backend, &config, &cli.query).await?;
    run_moderation(&backend).await?;
    Ok(())
}

fn seed(backend: &Arc<InMemoryBackend>, seed_file: Option<PathBuf>) -> anyhow::Result<()> {
    let seller = UserId::generate();
    let builtins = [
        ("Desk Lamp", "warm LED desk lamp", 2900, Category::Home),
        ("Desk Mat", "felt desk mat, grey", 1900, Category::Home),
        (
            "Mechanical Keyboard",
            "tactile switches",
            8900,
            Category::Electronics,
        ),
        ("Running Shoes", "road running shoes", 12900, Category::Sports),
    ];
    for (title, description, price_cents, category) in builtins {
        backend.seed_product(product(seller, title, description, price_cents, category));
    }

    if let Some(path) = seed_file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let extra: Vec<SeedProduct> =
            serde_json::from_str(&content).context("parsing seed file")?;
        tracing::info!(count = extra.len(), "seeding extra products");
        for item in extra {
            backend.seed_product(product(
                seller,
                &item.title,
                &item.description,
                item.price_cents,
                item.category,
            ));
        }
    }

    for shop_name in ["Rugs R Us", "Lamp World"] {
        backend.seed_seller(SellerProfile {
            id: UserId::generate(),
            shop_name: shop_name.to_string(),
            email: format!("{}@example.com", shop_name.to_lowercase().replace(' ', ".")),
            status: SellerStatus::Pending,
            moderation_notes: String::new(),
            applied_at: SystemTime::now(),
        });
    }
    Ok(())
}

fn product(
    seller: UserId,
    title: &str,
    description: &str,
    price_cents: u64,
    category: Category,
) -> Product {
    Product {
        id: ProductId::generate(),
        seller_id: seller,
        title: title.to_string(),
        description: description.to_string(),
        price_cents,
        category,
        status: ProductStatus::Active,
        image_url: None,
        created_at: SystemTime::now(),
    }
}

async fn run_search(
    backend: &Arc<InMemoryBackend>,
    config: &AppConfig,
    query: &str,
) -> anyhow::Result<()> {
    let products: Arc<dyn ProductRepository> = backend.clone();
    let controller = ProductSearchController::new(products, config);
    let mut rx = controller.watch();

    println!("--- search: {query:?} ---");
    controller.dispatch(ProductSearchIntent::QueryChanged(query.to_string()));
    let state = wait_for(&mut rx, |s| {
        !s.searching && (!s.results.is_empty() || s.error.is_some())
    })
    .await
    .context("waiting for search to settle")?;
    match &state.error {
        Some(message) => println!("search failed: {message}"),
        None => {
            for item in &state.visible {
                println!(
                    "  {} — {} cents ({:?})",
                    item.title, item.price_cents, item.category
                );
            }
        }
    }
    controller.close();
    Ok(())
}

async fn run_moderation(backend: &Arc<InMemoryBackend>) -> anyhow::Result<()> {
    let sellers: Arc<dyn SellerRepository> = backend.clone();
    let controller = ModerationController::new(sellers);
    let mut rx = controller.watch();

    println!("--- moderation: pending sellers ---");
    controller.start();
    let state = wait_for(&mut rx, |s| !s.sellers.is_empty())
        .await
        .context("waiting for pending sellers")?;
    for seller in &state.sellers {
        println!("  {} <{}>", seller.shop_name, seller.email);
    }

    let first = state.sellers[0].clone();
    println!("approving {:?}", first.shop_name);
    controller.dispatch(ModerationIntent::Select(first));
    controller.dispatch(ModerationIntent::ShowApproveDialog);
    controller.dispatch(ModerationIntent::NotesChanged("looks good".to_string()));
    controller.dispatch(ModerationIntent::ConfirmDecision);

    // The list shrinks only once the subscription reflects the write.
    let state = wait_for(&mut rx, |s| !s.submitting && s.sellers.len() == 1)
        .await
        .context("waiting for the pending list to update")?;
    println!("still pending: {}", state.sellers.len());
    controller.close();
    Ok(())
}

/// Wait (with a timeout) until the observed state satisfies `done`.
async fn wait_for<S: UiState>(
    rx: &mut watch::Receiver<S>,
    done: impl Fn(&S) -> bool,
) -> anyhow::Result<S> {
    let deadline = Duration::from_secs(5);
    tokio::time::timeout(deadline, async {
        loop {
            {
                let state = rx.borrow_and_update();
                if done(&state) {
                    return Ok((*state).clone());
                }
            }
            rx.changed().await.context("state channel closed")?;
        }
    })
    .await
    .context("timed out waiting for state")?
}
