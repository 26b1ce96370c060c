//! Sample documents and environment helpers.

use std::sync::Once;

use vidhost_config::{CustomConfig, NsfwPolicy, Resolution};
use vidhost_telemetry::{LogFormat, LoggingConfig, init_logging};

static LOGGING: Once = Once::new();

/// Install a debug-level subscriber once per test binary.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let config = LoggingConfig {
            level: "debug",
            format: LogFormat::Pretty,
            build_sha: "test",
        };
        if let Err(err) = init_logging(&config) {
            eprintln!("test logging unavailable: {err}");
        }
    });
}

/// Valid document resembling a small public instance.
#[must_use]
pub fn sample_config() -> CustomConfig {
    let mut config = CustomConfig::default();
    config.instance.name = "Tube".to_string();
    config.instance.short_description = "A community video platform".to_string();
    config.instance.description = "Welcome to **Tube**.".to_string();
    config.instance.terms = "Be excellent to each other.".to_string();
    config.instance.default_client_route = "/videos/trending".to_string();
    config.instance.default_nsfw_policy = NsfwPolicy::Blur;
    config.instance.customizations.css = "body { background: #111; }".to_string();
    config.instance.customizations.javascript = String::new();
    config.services.twitter.username = "@tube".to_string();
    config.services.twitter.whitelisted = false;
    config.cache.previews.size = 1;
    config.cache.captions.size = 1;
    config.signup.enabled = true;
    config.signup.limit = 100;
    config.signup.requires_email_verification = true;
    config.admin.email = "admin@tube.example".to_string();
    config.user.video_quota = -1;
    config.user.video_quota_daily = -1;
    config.transcoding.enabled = true;
    config.transcoding.threads = 2;
    config.transcoding.resolutions = [
        (Resolution::P240, true),
        (Resolution::P360, false),
        (Resolution::P480, true),
        (Resolution::P720, true),
        (Resolution::P1080, false),
    ]
    .into_iter()
    .collect();
    config.import.videos.http.enabled = true;
    config.import.videos.torrent.enabled = false;
    config
}
