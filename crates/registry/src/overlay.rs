//! Per-frame aggregation of provider output.

use blockinfo_primitives::Vec3;
use tracing::trace;

use crate::provider::{AnnotationContext, AnnotationProvider};
use crate::registry::ProviderRegistry;
use crate::settings::OverlaySettings;
use crate::target::TargetBlock;

#[cfg(test)]
mod tests;

/// Draws stacked text lines at a world-space anchor.
pub trait TextSink {
	fn draw_lines(&mut self, lines: &[String], anchor: Vec3);
}

/// The lines gathered for one target in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLineSet {
	pub anchor: Vec3,
	pub lines: Vec<String>,
}

/// A sink that keeps every draw call.
#[derive(Debug, Default)]
pub struct RecordingSink {
	pub calls: Vec<RenderLineSet>,
}

impl TextSink for RecordingSink {
	fn draw_lines(&mut self, lines: &[String], anchor: Vec3) {
		self.calls.push(RenderLineSet {
			anchor,
			lines: lines.to_vec(),
		});
	}
}

/// The block info overlay: a finalized registry plus its master switch.
#[derive(Debug)]
pub struct InfoOverlay {
	pub registry: ProviderRegistry,
	pub settings: OverlaySettings,
}

impl InfoOverlay {
	pub fn new(registry: ProviderRegistry) -> Self {
		Self {
			registry,
			settings: OverlaySettings::default(),
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.settings.enabled.get()
	}

	/// Collects the lines every active, applicable provider has for `target`.
	///
	/// `None` when the overlay is off, the target's state cannot be resolved,
	/// or no provider produced anything.
	pub fn collect(&self, target: &dyn TargetBlock) -> Option<RenderLineSet> {
		if !self.is_enabled() {
			return None;
		}
		let Some(ctx) = AnnotationContext::resolve(target) else {
			trace!(pos = %target.pos(), "target state unavailable");
			return None;
		};

		let mut lines = Vec::new();
		for entry in self.registry.iter() {
			if !entry.is_active() || !entry.applies(&ctx) {
				continue;
			}
			if let Some(produced) = entry.lines(&ctx) {
				lines.extend(produced);
			}
		}

		if lines.is_empty() {
			return None;
		}
		trace!(pos = %ctx.pos, count = lines.len(), "collected block info");
		Some(RenderLineSet {
			anchor: ctx.pos.center(),
			lines,
		})
	}

	/// Collects and draws the annotations for `target`. Returns whether anything was drawn.
	pub fn render(&self, target: &dyn TargetBlock, sink: &mut dyn TextSink) -> bool {
		match self.collect(target) {
			Some(set) => {
				sink.draw_lines(&set.lines, set.anchor);
				true
			}
			None => false,
		}
	}
}
