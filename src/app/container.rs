//! Dependency injection container for the Q-learning application.
//!
//! The container owns the persistence adapter and builds agents from
//! configuration, so commands and tests share one wiring path.

use std::{path::Path, sync::Arc};

use super::config::AgentConfig;
use crate::{
    Result,
    adapters::MsgPackRepository,
    pipeline::{TrainingConfig, TrainingLoop, TrainingResult},
    ports::{Observer, TableRepository},
    q_learning::QLearningAgent,
};

/// How [`App::load_or_train`] obtained the agent's table.
#[derive(Debug, Clone)]
pub enum Startup {
    /// An existing snapshot was loaded; no training happened.
    Loaded { states: usize },
    /// No snapshot was found, so the agent was trained and the table saved.
    Trained(TrainingResult),
}

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use qtictactoe::app::{App, AgentConfig};
///
/// let app = App::new();
/// let agent = app.create_agent(AgentConfig::default().with_seed(42))?;
/// assert!(agent.table().is_empty());
/// # Ok::<(), qtictactoe::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use qtictactoe::app::App;
/// use qtictactoe::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    /// Repository for table persistence
    repository: Arc<dyn TableRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses:
    /// - `MsgPackRepository` for table persistence
    /// - No default seed (non-deterministic RNG)
    pub fn new() -> Self {
        Self {
            repository: Arc::new(MsgPackRepository::new()),
            default_seed: None,
        }
    }

    /// Create an app around an explicit repository.
    pub fn with_repository(repository: Arc<dyn TableRepository + Send + Sync>) -> Self {
        Self {
            repository,
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the table repository.
    pub fn repository(&self) -> Arc<dyn TableRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    /// Create a fresh agent with an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if a hyperparameter is
    /// out of range.
    pub fn create_agent(&self, config: AgentConfig) -> Result<QLearningAgent> {
        config.validate()?;

        let config = match (config.seed, self.default_seed) {
            (None, Some(seed)) => config.with_seed(seed),
            _ => config,
        };
        Ok(QLearningAgent::new(&config))
    }

    /// Load a saved table into a fresh agent.
    pub fn load_agent(&self, config: AgentConfig, path: &Path) -> Result<QLearningAgent> {
        let table = self.repository.load(path)?;
        log::info!(
            "loaded Q-table from {} ({} states)",
            path.display(),
            table.len()
        );
        Ok(self.create_agent(config)?.with_table(table))
    }

    /// Save an agent's table.
    pub fn save_agent(&self, agent: &QLearningAgent, path: &Path) -> Result<()> {
        self.repository.save(agent.table(), path)
    }

    /// Reuse the snapshot at `path` when there is one; otherwise train from
    /// scratch and save the result there.
    ///
    /// A missing snapshot means no prior knowledge. An unreadable or corrupt
    /// snapshot is an error rather than a silent retrain.
    pub fn load_or_train(
        &self,
        config: AgentConfig,
        path: &Path,
        training: TrainingConfig,
        observers: Vec<Box<dyn Observer>>,
    ) -> Result<(QLearningAgent, Startup)> {
        let agent = self.create_agent(config)?;

        if let Some(table) = self.repository.load_if_exists(path)? {
            let states = table.len();
            log::info!(
                "loaded existing Q-table from {} ({states} states)",
                path.display()
            );
            return Ok((agent.with_table(table), Startup::Loaded { states }));
        }

        log::info!("no Q-table at {}, training a new agent", path.display());
        let mut agent = agent;
        let mut training_loop = observers.into_iter().fold(
            TrainingLoop::new(training).with_snapshot(self.repository(), path),
            TrainingLoop::with_observer,
        );
        let result = training_loop.run(&mut agent)?;
        Ok((agent, Startup::Trained(result)))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject in-memory repositories and control
/// randomness.
pub struct AppBuilder {
    repository: Option<Arc<dyn TableRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            repository: None,
            default_seed: None,
        }
    }

    /// Set a custom table repository.
    pub fn with_repository<R: TableRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    /// Set a default random seed for all agents created by this container.
    ///
    /// A seed on the [`AgentConfig`] takes precedence.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, uses `MsgPackRepository` by default.
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
