// Mentionwatch - Local workflow demo
//
// Drives the creation wizard and the listing controller once against the
// configured providers (mock by default). Useful for eyeballing the wired
// stack without a frontend.

use tracing::{error, info};

use mentionwatch_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .pretty()
        .init();

    info!("Starting Mentionwatch local workflow demo");

    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(log_level = %config.log_level, "Configuration loaded successfully");

    let mut controllers = mentionwatch_app::create_controllers().map_err(|e| {
        error!("Failed to wire controllers: {}", e);
        e
    })?;

    controllers.list.load().await?;
    info!(count = controllers.list.projects().len(), "Initial project list loaded");

    // Walk the two-step wizard once
    let flow = &mut controllers.flow;
    flow.set_name("Ferris Tracker")?;
    flow.set_description("Tracks Reddit chatter about a crab-themed side project")?;

    flow.request_analysis().await?;
    let analysis = flow
        .analysis()
        .ok_or_else(|| anyhow::anyhow!("analysis missing after a successful request"))?;
    info!(
        keywords = ?analysis.keywords,
        subreddits = ?analysis.subreddits,
        "Draft analyzed"
    );

    let project = controllers.list.create(flow).await?;
    info!(project_id = %project.id, name = %project.name, "Project created");

    for notice in controllers.list.take_notices() {
        info!(kind = ?notice.kind, message = %notice.message, "notice");
    }

    controllers.list.delete(project.id).await?;
    info!(
        remaining = controllers.list.projects().len(),
        "Project deleted, demo complete"
    );

    Ok(())
}
