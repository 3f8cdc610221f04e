mod domain;
mod clients;

mod app_system;
mod bulk_modify;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod coupon_actor;
mod promotion_actor;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{info, warn, Instrument};
use crate::app_system::{setup_tracing, Catalog, CouponSystem};
use crate::bulk_modify::{
    BatchScheduler, ChunkedUpdater, FailurePolicy, ModifierOptions, ProgressEvent, RequestCollector,
    DEFAULT_CHUNK_SIZE,
};

/// Bulk-modify the usage limits of every coupon in a promotion.
#[derive(Parser, Debug)]
#[command(name = "coupon_bulk_modify", version)]
struct Cli {
    /// Quantity of coupons for one modify operation
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, allow_negative_numbers = true)]
    modify_limit: i64,
    /// Number of uses per coupon: 0 = unlimited, 1 = limited
    #[arg(long, default_value_t = 0)]
    limit: u8,
    /// Number of uses, when limited
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    usage_limit: i64,
    /// Number of uses per customer per coupon: 0 = unlimited, 1 = limited
    #[arg(long, default_value_t = 0)]
    limit_customer: u8,
    /// Number of uses per customer, when limited
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    usage_limit_customer: i64,
    /// Promotion whose coupons are updated
    #[arg(long, env = "COUPON_PROMOTION_ID")]
    promotion_id: Option<String>,
    /// JSON file with the options above; replaces the individual flags
    #[arg(long)]
    options_file: Option<PathBuf>,
    /// JSON catalog of promotions and coupons to seed; a demo catalog is used otherwise
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Print the selectable promotions and exit
    #[arg(long)]
    list_promotions: bool,
    /// What to do when a single coupon cannot be saved
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    on_save_failure: FailurePolicy,
}

impl Cli {
    fn modifier_options(&self) -> anyhow::Result<ModifierOptions> {
        if let Some(path) = &self.options_file {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading options file {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("parsing options file {}", path.display()));
        }
        Ok(ModifierOptions {
            modify_limit: self.modify_limit,
            limit: self.limit,
            usage_limit: self.usage_limit,
            limit_customer: self.limit_customer,
            usage_limit_customer: self.usage_limit_customer,
            promotion_id: self.promotion_id.clone(),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::demo(),
    };

    let system = CouponSystem::new();
    catalog
        .seed(&system.promotion_client, &system.coupon_client)
        .instrument(tracing::info_span!("catalog_seed"))
        .await?;

    let collector = RequestCollector::new(system.promotion_client.clone(), system.coupon_client.clone());

    if cli.list_promotions {
        for (id, name) in collector.promotion_options().await? {
            println!("{}\t{}", id, name);
        }
        system.shutdown().await.map_err(anyhow::Error::msg)?;
        return Ok(());
    }

    let options = cli.modifier_options()?;
    let job = match collector.submit(&options).await {
        Ok(job) => job,
        Err(e) => {
            system.shutdown().await.map_err(anyhow::Error::msg)?;
            return Err(e.into());
        }
    };

    let cancelled = Arc::new(AtomicBool::new(false));
    let cancel_flag = cancelled.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current chunk");
            cancel_flag.store(true, Ordering::SeqCst);
        }
    });

    let (progress_tx, mut progress_rx) = mpsc::channel::<ProgressEvent>(64);
    let printer = tokio::spawn(async move {
        while let Some(event) = progress_rx.recv().await {
            println!(
                "[{:>5.1}% {}/{}] {}",
                event.fraction * 100.0,
                event.processed,
                event.total,
                event.message
            );
        }
    });

    let updater = ChunkedUpdater::new(system.coupon_client.clone(), job, cli.on_save_failure);
    let scheduler = BatchScheduler::with_progress(progress_tx);
    let outcome = scheduler
        .run(updater, || cancelled.load(Ordering::SeqCst))
        .instrument(tracing::info_span!("bulk_modify"))
        .await;
    drop(scheduler);
    let _ = printer.await;

    println!("{}", outcome.message);
    for coupon_id in &outcome.failed_coupons {
        println!("Not saved: {}", coupon_id);
    }
    if !outcome.success {
        match &outcome.last_processed {
            Some(coupon_id) => println!("Last coupon updated: {}", coupon_id),
            None => println!("No coupons were updated."),
        }
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;

    match outcome.error {
        Some(e) => Err(e.into()),
        None => {
            info!(results = outcome.results, "Application completed successfully");
            Ok(())
        }
    }
}
