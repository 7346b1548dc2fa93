//! Application layer with dependency injection container.
//!
//! The container owns infrastructure dependencies and provides factory
//! methods for creating domain objects.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │          App (DI Container)          │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                      │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - MsgPackRepository / JsonRepository│   │
//! │  │  - InMemoryRepository (testing)      │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Ports (ports)                │   │
//! │  │  - TableRepository trait             │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                   │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Logic                        │   │
//! │  │  - QLearningAgent / QTable           │   │
//! │  │  - TrainingLoop                      │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use std::path::Path;
//!
//! use qtictactoe::adapters::InMemoryRepository;
//! use qtictactoe::app::{AgentConfig, App, Startup};
//! use qtictactoe::pipeline::TrainingConfig;
//!
//! let app = App::for_testing()
//!     .with_repository(InMemoryRepository::new())
//!     .with_default_seed(42)
//!     .build();
//! let (agent, startup) = app.load_or_train(
//!     AgentConfig::default(),
//!     Path::new("qtable.msgpack"),
//!     TrainingConfig::new(100),
//!     Vec::new(),
//! )?;
//! assert!(matches!(startup, Startup::Trained(_)));
//! assert!(!agent.table().is_empty());
//! # Ok::<(), qtictactoe::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::AgentConfig;
pub use container::{App, AppBuilder, Startup};
