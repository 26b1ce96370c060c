//! Recording collaborators for driving the configuration editor in tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use vidhost_config::CustomConfig;
use vidhost_editor::{
    ConfigEditor, ConfigReloader, ConfigurationService, ConfirmPrompt, ConfirmRequest,
    EditorConfig, EditorDeps, Notification, NotificationKind, Notifier,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

type PersistTransform = Box<dyn Fn(CustomConfig) -> CustomConfig + Send + Sync>;

/// In-memory configuration backend with scripted failures.
#[derive(Default)]
pub struct InMemoryConfigService {
    stored: Mutex<CustomConfig>,
    fetch_error: Mutex<Option<String>>,
    persist_error: Mutex<Option<String>>,
    transform: Mutex<Option<PersistTransform>>,
    persisted: Mutex<Vec<CustomConfig>>,
    fetch_calls: AtomicUsize,
}

impl InMemoryConfigService {
    /// Backend serving `config`.
    #[must_use]
    pub fn new(config: CustomConfig) -> Self {
        Self {
            stored: Mutex::new(config),
            ..Self::default()
        }
    }

    /// Make every subsequent fetch fail with `message`.
    pub fn fail_fetch(&self, message: &str) {
        *lock(&self.fetch_error) = Some(message.to_string());
    }

    /// Make every subsequent persist fail with `message`.
    pub fn fail_persist(&self, message: &str) {
        *lock(&self.persist_error) = Some(message.to_string());
    }

    /// Rewrite documents before storing them, as a normalising server would.
    pub fn normalize_with<F>(&self, transform: F)
    where
        F: Fn(CustomConfig) -> CustomConfig + Send + Sync + 'static,
    {
        *lock(&self.transform) = Some(Box::new(transform));
    }

    /// Currently stored document.
    #[must_use]
    pub fn stored(&self) -> CustomConfig {
        lock(&self.stored).clone()
    }

    /// Documents received by `persist`, in call order.
    #[must_use]
    pub fn persisted(&self) -> Vec<CustomConfig> {
        lock(&self.persisted).clone()
    }

    /// Number of `fetch_current` calls.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigurationService for InMemoryConfigService {
    async fn fetch_current(&self) -> Result<CustomConfig> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = lock(&self.fetch_error).clone();
        if let Some(message) = scripted {
            return Err(anyhow!(message));
        }
        Ok(self.stored())
    }

    async fn persist(&self, config: CustomConfig) -> Result<CustomConfig> {
        lock(&self.persisted).push(config.clone());
        let scripted = lock(&self.persist_error).clone();
        if let Some(message) = scripted {
            return Err(anyhow!(message));
        }
        let stored = {
            let transform = lock(&self.transform);
            match transform.as_ref() {
                Some(transform) => transform(config),
                None => config,
            }
        };
        *lock(&self.stored) = stored.clone();
        Ok(stored)
    }
}

/// Reloader counting its invocations.
#[derive(Debug, Default)]
pub struct CountingReloader {
    calls: AtomicUsize,
}

impl CountingReloader {
    /// Number of reloads requested.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConfigReloader for CountingReloader {
    fn reload(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Prompt that "types" a fixed answer, or cancels when none is set.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    typed: Mutex<Option<String>>,
    requests: Mutex<Vec<ConfirmRequest>>,
}

impl ScriptedPrompt {
    /// Type `text` into every subsequent prompt.
    pub fn answer(&self, text: &str) {
        *lock(&self.typed) = Some(text.to_string());
    }

    /// Cancel every subsequent prompt.
    pub fn cancel(&self) {
        *lock(&self.typed) = None;
    }

    /// Requests shown so far.
    #[must_use]
    pub fn requests(&self) -> Vec<ConfirmRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl ConfirmPrompt for ScriptedPrompt {
    async fn confirm_with_input(&self, request: &ConfirmRequest) -> bool {
        lock(&self.requests).push(request.clone());
        lock(&self.typed)
            .as_deref()
            .is_some_and(|typed| request.accepts(typed))
    }
}

/// Notifier capturing every notification.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// All notifications, oldest first.
    #[must_use]
    pub fn all(&self) -> Vec<Notification> {
        lock(&self.notifications).clone()
    }

    /// Notifications of the given kind.
    #[must_use]
    pub fn of_kind(&self, kind: NotificationKind) -> Vec<Notification> {
        self.all()
            .into_iter()
            .filter(|notification| notification.kind == kind)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        lock(&self.notifications).push(notification);
    }
}

/// Editor wired to recording collaborators.
pub struct Harness {
    /// Backend fake.
    pub service: Arc<InMemoryConfigService>,
    /// Reload counter.
    pub reloader: Arc<CountingReloader>,
    /// Scripted confirmation dialog.
    pub prompt: Arc<ScriptedPrompt>,
    /// Notification recorder.
    pub notifier: Arc<RecordingNotifier>,
    /// Editor under test.
    pub editor: ConfigEditor,
}

impl Harness {
    /// Editor with default settings serving `config`.
    #[must_use]
    pub fn new(config: CustomConfig) -> Self {
        Self::with_config(config, EditorConfig::default())
    }

    /// Editor with explicit settings serving `config`.
    #[must_use]
    pub fn with_config(config: CustomConfig, settings: EditorConfig) -> Self {
        let service = Arc::new(InMemoryConfigService::new(config));
        let reloader = Arc::new(CountingReloader::default());
        let prompt = Arc::new(ScriptedPrompt::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let deps = EditorDeps::new(
            service.clone(),
            reloader.clone(),
            prompt.clone(),
            notifier.clone(),
            &settings,
        );
        Self {
            service,
            reloader,
            prompt,
            notifier,
            editor: ConfigEditor::new(deps, settings),
        }
    }
}
