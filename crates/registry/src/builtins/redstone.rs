use blockinfo_primitives::properties::{COMPARATOR_MODE, DELAY, POWER, POWERED};

use crate::provider::{AnnotationContext, AnnotationProvider};

/// Power level, powered state, repeater delay and comparator mode.
///
/// Any block with a `powered` state counts, so doors, trapdoors and rails
/// show `Powered:` too.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedstoneInfo;

impl RedstoneInfo {
	pub const KEY: &'static str = "redstonetext";
}

impl AnnotationProvider for RedstoneInfo {
	fn applies(&self, ctx: &AnnotationContext<'_>) -> bool {
		[POWER, POWERED, DELAY, COMPARATOR_MODE].iter().any(|p| ctx.has(p))
	}

	fn lines(&self, ctx: &AnnotationContext<'_>) -> Option<Vec<String>> {
		let mut lines = Vec::new();

		if let Some(power) = ctx.property(&POWER).and_then(|v| v.as_int()) {
			lines.push(format!("Power: {power}"));
		}
		if let Some(powered) = ctx.property(&POWERED).and_then(|v| v.as_bool()) {
			lines.push(format!("Powered: {powered}"));
		}
		if let Some(delay) = ctx.property(&DELAY).and_then(|v| v.as_int()) {
			let unit = if delay == 1 { "tick" } else { "ticks" };
			lines.push(format!("Delay: {delay} {unit}"));
		}
		if let Some(mode) = ctx.property(&COMPARATOR_MODE).and_then(|v| v.as_str()) {
			lines.push(format!("Mode: {mode}"));
		}

		(!lines.is_empty()).then_some(lines)
	}
}
