//! # Main Entry Point
//!
//! Composition root for the tip bot:
//! - Domain: Configuration, Catalog and Types
//! - Application: Tracker, Formatter, Scheduler, Router, Health, Logging
//! - Infrastructure: Matrix, HTTP health endpoint, RNG
//! - Interface: Command Handlers and CLI
//!
//! The tracker is built once here and shared by handle with the command router,
//! the daily scheduler and the health endpoint.

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Result, anyhow};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::watch;

use crate::application::formatter::TipFormatter;
use crate::application::health::HealthReporter;
use crate::application::router::CommandRouter;
use crate::application::scheduler::DailySchedule;
use crate::application::tracker::TipTracker;
use crate::domain::catalog::Catalog;
use crate::domain::config::AppConfig;
use crate::infrastructure::random::ThreadRngSource;
use crate::infrastructure::{health_server, matrix};
use crate::interface::cli::Cli;
use crate::strings::logs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(&cli.config)?;
    config.apply_overrides(cli.overrides());
    let daily_time = config.tips.parsed_daily_time()?;
    let timezone = config.tips.parsed_timezone()?;

    // 2. Logging Setup
    let _log_guard = application::logging::init(&config.system.log_dir)?;
    tracing::info!("{}", logs::config_loaded(&cli.config));

    // 3. Core: catalog, tracker, formatter
    let catalog = match &config.tips.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin(),
    };
    tracing::info!(
        "{}",
        logs::catalog_loaded(
            catalog.len(),
            config.tips.catalog.as_deref().unwrap_or("built-in set")
        )
    );

    let tracker = Arc::new(TipTracker::new(catalog, Box::new(ThreadRngSource)));
    let formatter = Arc::new(TipFormatter::new(Box::new(ThreadRngSource)));
    let router = CommandRouter::new(tracker.clone(), formatter.clone());

    // 4. Health endpoint (bound early so a busy port fails startup)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let health_listener = if config.health.enabled {
        Some(health_server::bind(&config.health.bind).await?)
    } else {
        None
    };

    // 5. Matrix Setup
    let client = matrix::connect(&config.services.matrix).await?;

    // 6. Event Handlers
    let start_time = SystemTime::now();
    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore backlog delivered by the initial sync
            let ts = ev.origin_server_ts();
            let event_time = UNIX_EPOCH + Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                if original_msg.sender == room.own_user_id() {
                    return;
                }

                let chat = matrix::MatrixService::new(room);
                if let Err(e) = router
                    .route(&chat, &text_content.body, original_msg.sender.as_str())
                    .await
                {
                    tracing::error!("Failed to route message: {}", e);
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(
        |ev: StrippedRoomMemberEvent, room: Room, client: Client| async move {
            if ev.content.membership != MembershipState::Invite
                || client.user_id() != Some(&*ev.state_key)
            {
                return;
            }
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::error!("{}", logs::join_invite_fail(&e.to_string()));
            }
        },
    );

    // 7. Daily Schedule
    let schedule = DailySchedule::new(daily_time, timezone);
    let job_client = client.clone();
    let job_channel = config.tips.channel.clone();
    let job_tracker = tracker.clone();
    let job_formatter = formatter.clone();
    tokio::spawn(schedule.run(move || {
        let client = job_client.clone();
        let channel = job_channel.clone();
        let tracker = job_tracker.clone();
        let formatter = job_formatter.clone();
        async move {
            match matrix::open_destination(&client, &channel).await {
                Ok(chat) => {
                    application::poster::post_daily_tip(&tracker, &formatter, &chat).await;
                }
                Err(e) => {
                    tracing::error!("{}", logs::channel_resolve_failed(&channel, &format!("{e:#}")));
                }
            }
        }
    }));

    // 8. Health Server
    let health_handle = health_listener.map(|listener| {
        let reporter = Arc::new(HealthReporter::new(tracker.clone()));
        let mut rx = shutdown_rx.clone();
        tokio::spawn(async move {
            let shutdown = async move {
                let _ = rx.changed().await;
            };
            if let Err(e) = health_server::serve(listener, reporter, shutdown).await {
                tracing::error!("{}", logs::health_server_fail(&format!("{e:#}")));
            }
        })
    });

    tracing::info!("{}", logs::STARTUP_BANNER);
    tracing::info!(
        "{}",
        logs::schedule_info(&config.tips.daily_time, &config.tips.timezone)
    );
    tracing::info!("{}", logs::channel_info(&config.tips.channel));
    if config.health.enabled {
        tracing::info!("{}", logs::health_info(&config.health.bind));
    } else {
        tracing::info!("{}", logs::HEALTH_DISABLED);
    }
    tracing::info!("Available commands: .tip, .reset, .status, .help");

    // 9. Sync until a shutdown signal arrives
    tracing::info!("{}", logs::SYNC_LOOP_START);
    let sync_client = client.clone();
    tokio::select! {
        res = sync_client.sync(SyncSettings::default()) => {
            if let Err(e) = res {
                tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
                return Err(anyhow!(logs::sync_loop_fail(&e.to_string())));
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("{}", logs::SHUTDOWN);
        }
    }

    let _ = shutdown_tx.send(true);
    if let Some(handle) = health_handle {
        let _ = handle.await;
    }

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
