use crate::provider::{AnnotationContext, AnnotationProvider};

/// The written text of a sign, front face first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignTextInfo;

impl SignTextInfo {
	pub const KEY: &'static str = "signtext";
}

fn written(lines: &[String]) -> impl Iterator<Item = String> + '_ {
	lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()).map(str::to_string)
}

impl AnnotationProvider for SignTextInfo {
	fn applies(&self, ctx: &AnnotationContext<'_>) -> bool {
		ctx.has_sign_text()
	}

	fn lines(&self, ctx: &AnnotationContext<'_>) -> Option<Vec<String>> {
		let sign = ctx.sign_text()?;
		let mut lines: Vec<String> = written(&sign.front).collect();

		let mut back = written(&sign.back).peekable();
		if back.peek().is_some() {
			lines.push("Back:".to_string());
			lines.extend(back);
		}

		(!lines.is_empty()).then_some(lines)
	}
}
