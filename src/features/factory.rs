//! Wiring of the default feature factories.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::config::RepositoryConfig;
use crate::features::home::{DefaultHomeFactory, HomeFactory};
use crate::features::login::{DefaultLoginFactory, LoginFactory};
use crate::features::profile::{DefaultProfileFactory, ProfileFactory};
use crate::features::repository::MockDataRepository;

/// The factories coordinators build screens with.
#[derive(Clone)]
pub struct FlowFactories {
    pub login: Arc<dyn LoginFactory>,
    pub home: Arc<dyn HomeFactory>,
    pub profile: Arc<dyn ProfileFactory>,
}

/// Default factories sharing one repository and one async runtime.
pub struct AppFactory {
    repository: Arc<MockDataRepository>,
    runtime: Handle,
}

impl AppFactory {
    pub fn new(config: RepositoryConfig, runtime: Handle) -> Self {
        Self {
            repository: Arc::new(MockDataRepository::new(config)),
            runtime,
        }
    }

    pub fn flow_factories(&self) -> FlowFactories {
        FlowFactories {
            login: Arc::new(DefaultLoginFactory),
            home: Arc::new(DefaultHomeFactory::new(
                Arc::clone(&self.repository),
                self.runtime.clone(),
            )),
            profile: Arc::new(DefaultProfileFactory::new(
                Arc::clone(&self.repository),
                self.runtime.clone(),
            )),
        }
    }
}
