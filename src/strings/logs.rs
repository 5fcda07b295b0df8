pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn catalog_loaded(count: usize, source: &str) -> String {
    format!("Loaded {count} tips from {source}")
}

pub const LOGIN_SUCCESS: &str = "Logged in successfully!";

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const STARTUP_BANNER: &str = "⚡️ Daily Tip Bot is running!";

pub fn schedule_info(daily_time: &str, timezone: &str) -> String {
    format!("📅 Daily tips scheduled for {daily_time} ({timezone} timezone)")
}

pub fn channel_info(channel: &str) -> String {
    format!("📢 Posting to channel: {channel}")
}

pub fn health_info(bind: &str) -> String {
    format!("🏥 Health check available at http://{bind}/health")
}

pub const HEALTH_DISABLED: &str = "🏥 Health check disabled";

pub fn next_post(at: &str) -> String {
    format!("Next daily tip at {at}")
}

pub const POSTING_DAILY: &str = "📅 Posting daily tip...";

pub fn tip_posted(id: u32, title: &str) -> String {
    format!("✅ Posted tip #{id}: {title}")
}

pub fn tip_post_failed(err: &str) -> String {
    format!("❌ Error posting daily tip: {err}")
}

pub fn channel_resolve_failed(channel: &str, err: &str) -> String {
    format!("❌ Could not open destination {channel}: {err}")
}

pub fn command_failed(command: &str, err: &str) -> String {
    format!("Error responding to {command}: {err}")
}

pub fn fallback_failed(err: &str) -> String {
    format!("Failed to deliver fallback message: {err}")
}

pub const CYCLE_RESET: &str = "🔄 All tips used, resetting cycle";
pub const CYCLE_RESET_MANUAL: &str = "🔄 Tip cycle reset on request";

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn health_server_fail(err: &str) -> String {
    format!("Health server stopped: {err}")
}

pub const SHUTDOWN: &str = "👋 Shutting down gracefully...";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}
