use anyhow::Context;
use clap::Parser;

use article_board::api::MockArticleApi;
use article_board::articles::{RetryPolicy, Synchronizer};
use article_board::cli::Cli;
use article_board::logging::init_tracing;
use article_board::shutdown::Shutdown;
use article_board::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli
        .load_config()
        .with_context(|| format!("loading {}", cli.config_path().display()))?;
    tracing::info!(?config, "starting");

    // One thread: folds never race and store calls interleave cooperatively.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building runtime")?;

    runtime.block_on(async move {
        let shutdown = Shutdown::new();
        let api = MockArticleApi::new(config.fixture(), config.stub_settings());
        let (sync, handle) = Synchronizer::new(api, RetryPolicy::from(&config.retry));
        let sync_task = tokio::spawn(sync.run(shutdown.clone()));

        let result = ui::run(handle, config.tick_rate(), shutdown.clone()).await;

        // No-op when the UI loop already signalled.
        shutdown.signal("terminal session ended");
        if let Err(err) = sync_task.await {
            tracing::warn!(error = %err, "synchronizer task ended abnormally");
        }
        tracing::info!("shutdown complete");

        result.context("terminal session failed")
    })
}
