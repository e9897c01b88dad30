//! Hydrorank Service Binary
//!
//! Runs the bounded water-treatment simulation and logs each tick's
//! sample, scores, and recommendation. The structured log stream is the
//! presentation surface of this binary.

use anyhow::Result;
use tokio_stream::StreamExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hydrorank_core::format_elapsed;
use hydrorank_engine::{SimConfig, Simulation};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Hydrorank simulator v{}", hydrorank_core::VERSION);

    // Load configuration
    let config = SimConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let (simulation, handle) = Simulation::new(config)?;

    // Presentation consumer: log every published tick
    let mut updates = handle.updates();
    let presenter = tokio::spawn(async move {
        while let Some(snapshot) = updates.next().await {
            let Some(rec) = snapshot.recommendation() else {
                continue;
            };
            info!(
                elapsed = %format_elapsed(snapshot.elapsed_secs),
                sample = %snapshot.current_sample,
                recommended = %rec.method,
                validity = %rec.validity_label(),
                "tick"
            );
        }
    });

    // Graceful shutdown on ctrl-c
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal");
    };

    let final_snapshot = simulation.run(shutdown).await;
    presenter.await?;

    info!(
        samples = final_snapshot.sample_history.len(),
        recommendations = final_snapshot.recommendation_history.len(),
        elapsed = %format_elapsed(final_snapshot.elapsed_secs),
        "run complete"
    );
    for scored in &final_snapshot.scored_methods {
        info!("  {}", scored);
    }
    if let Some(rec) = final_snapshot.recommendation() {
        info!(
            "Recommended method: {} (valid {})",
            rec.method,
            rec.validity_label()
        );
    }

    info!("Shutting down Hydrorank simulator");
    Ok(())
}
