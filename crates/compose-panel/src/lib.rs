//! Create/edit panel state shared between an owner and its descendants.
//!
//! Two variants share one state shape and one set of transitions:
//!
//! - [`use_compose`] owns a single [`ComposeState`] that descendants read
//!   through [`use_compose_context`].
//! - [`use_compose_registry`] owns a list of named states that descendants
//!   add to through [`define_compose`].
//!
//! Owners publish into an explicit [`LocalScope`]; consumers look the owner
//! up from any descendant scope and fail with [`ComposeError::MissingProvider`]
//! when there is none. Consumers expose `title` and `action` labels derived
//! from the `creating` flag.

pub mod context;
pub mod error;
pub mod labels;
pub mod options;
pub mod registry;
pub mod single;
pub mod state;

pub use compose_panel_runtime::{CompositionLocalProvider, LocalScope, MutableState};
pub use context::ComposeContext;
pub use error::ComposeError;
pub use labels::{normalize, LabelKind};
pub use options::{ComposeOptions, LabelOptions};
pub use registry::{
    define_compose, define_compose_with, use_compose_registry, ComposeRegistrar, ComposeRegistry,
};
pub use single::{use_compose, use_compose_context, Compose};
pub use state::{ComposeSnapshot, ComposeState};
