//! Block annotation registry.
//!
//! Providers turn a targeted block into lines of overlay text. They are
//! registered once at startup, sorted so that the most specific annotations
//! come first, and then queried every frame by the [`InfoOverlay`].
//!
//! # Modules
//!
//! - [`provider`] - the provider contract and the simple provider kinds
//! - [`builtins`] - the built-in provider set (coordinates, redstone, notes, signs, properties)
//! - [`registry`] - registration, the specificity sort and settings projections
//! - [`overlay`] - per-frame aggregation and the text sink seam
//! - [`settings`] - shared active flags and hotkey values
//! - [`target`] - the targeted block as seen by providers

pub mod builtins;
pub mod error;
pub mod overlay;
pub mod provider;
pub mod registry;
pub mod settings;
pub mod specificity;
pub mod target;

pub use blockinfo_primitives as primitives;
pub use error::{ProviderError, RegistryError};
pub use overlay::{InfoOverlay, RecordingSink, RenderLineSet, TextSink};
pub use provider::{AnnotationContext, AnnotationProvider, ProviderDef, SimpleProvider};
pub use registry::{ProviderEntry, ProviderRegistry, RegistryBuilder};
pub use settings::{BoolSetting, HotkeySetting, HotkeySettings, OverlaySettings};
pub use specificity::Specificity;
pub use target::{BlockState, MemoryBlock, SignText, TargetBlock};
