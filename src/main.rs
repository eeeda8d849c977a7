#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::Result;
use eframe::egui;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use feedbox::{i18n::Locale, ingest, ui, Message, SharedStore, Store};

fn main() -> Result<()> {
    // Log to stdout (if you run with `RUST_LOG=debug`).
    tracing_subscriber::fmt::init();

    let locale = Locale::detect();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let (change_tx, change_rx) = mpsc::unbounded_channel();
    let store = Store::shared(change_tx);

    let client = reqwest::Client::builder()
        .user_agent(concat!("feedbox/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1080.0, 800.0)),

        #[cfg(feature = "wgpu")]
        renderer: eframe::Renderer::Wgpu,

        ..Default::default()
    };

    let handle = rt.handle().clone();
    let worker_store = store.clone();
    if let Err(e) = eframe::run_native(
        "FeedBox",
        options,
        Box::new(move |cc| {
            handle.spawn(worker(
                message_rx,
                worker_store,
                client,
                cc.egui_ctx.clone(),
            ));
            Box::new(ui::App::new(cc, store, change_rx, message_tx, locale))
        }),
    ) {
        tracing::error!("{e}");
    }

    Ok(())
}

/// Turns submitted urls into ingestion tasks. Each submission gets its own
/// task; overlapping loads are allowed and settle in completion order.
async fn worker(
    mut messages: UnboundedReceiver<Message>,
    store: SharedStore,
    client: reqwest::Client,
    ctx: egui::Context,
) {
    while let Some(message) = messages.recv().await {
        match message {
            Message::AddFeed(url) => {
                let store = store.clone();
                let client = client.clone();
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    ingest::ingest(&store, &client, &url).await;
                    ctx.request_repaint();
                });
            }
        }
    }
}
