//! Mock data source with simulated network latency.

use std::future::Future;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::config::RepositoryConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Settings snapshot. Carried by value inside a profile destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SettingsData {
    pub notifications_enabled: bool,
    pub theme: String,
}

pub struct MockDataRepository {
    config: RepositoryConfig,
}

impl MockDataRepository {
    pub fn new(config: RepositoryConfig) -> Self {
        Self { config }
    }

    pub async fn welcome_message(&self) -> String {
        tokio::time::sleep(Duration::from_millis(self.config.home_delay_ms)).await;
        "Welcome to your Dashboard!".to_string()
    }

    pub async fn user_profile(&self) -> User {
        tokio::time::sleep(Duration::from_millis(self.config.profile_delay_ms)).await;
        User {
            id: Uuid::new_v4(),
            name: "Farrel Brian".to_string(),
            email: "farrel.brian@example.com".to_string(),
        }
    }

    pub async fn settings(&self) -> SettingsData {
        tokio::time::sleep(Duration::from_millis(self.config.settings_delay_ms)).await;
        SettingsData {
            notifications_enabled: true,
            theme: "Dark".to_string(),
        }
    }

    /// Profile screen data: user and settings fetched concurrently.
    pub async fn profile_bundle(&self) -> (User, SettingsData) {
        tokio::join!(self.user_profile(), self.settings())
    }
}

/// Result of an off-thread load, delivered back to the UI thread.
pub struct PendingLoad<T> {
    rx: oneshot::Receiver<T>,
}

impl<T: Send + 'static> PendingLoad<T> {
    /// Run `future` on `runtime`; poll the result from the UI thread.
    pub fn spawn<F>(runtime: &Handle, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        runtime.spawn(async move {
            if tx.send(future.await).is_err() {
                tracing::trace!("Load finished after its screen was dropped");
            }
        });
        Self { rx }
    }

    /// Non-blocking: `Some` exactly once, when the load has finished.
    pub fn poll(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}
