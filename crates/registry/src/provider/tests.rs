use blockinfo_primitives::properties::{AGE_1, AGE_25, AGE_3, FACING, HORIZONTAL_FACING, WATERLOGGED};
use blockinfo_primitives::{BlockPos, Direction};

use super::*;
use crate::target::MemoryBlock;

fn ctx(block: &MemoryBlock) -> AnnotationContext<'_> {
	AnnotationContext::resolve(block).expect("memory block resolves")
}

fn age() -> SimpleProvider {
	SimpleProvider::property("agetext", "Age: %s", &[AGE_1, AGE_3, AGE_25]).unwrap()
}

#[test]
fn property_formatter_uses_the_one_present_property() {
	let block = MemoryBlock::new("minecraft:nether_wart", BlockPos::ORIGIN).with(AGE_3, 2);
	let provider = age();

	assert!(provider.applies(&ctx(&block)));
	assert_eq!(provider.lines(&ctx(&block)), Some(vec!["Age: 2".to_string()]));
}

#[test]
fn property_formatter_prefers_earlier_candidates() {
	let block = MemoryBlock::new("minecraft:test", BlockPos::ORIGIN)
		.with(HORIZONTAL_FACING, Direction::West)
		.with(FACING, Direction::Up);
	let provider = SimpleProvider::property("facingtext", "Facing: %s", &[FACING, HORIZONTAL_FACING]).unwrap();

	assert_eq!(provider.lines(&ctx(&block)), Some(vec!["Facing: up".to_string()]));
}

#[test]
fn property_formatter_without_any_property_is_not_applicable() {
	let block = MemoryBlock::new("minecraft:stone", BlockPos::ORIGIN).with(WATERLOGGED, false);
	let provider = age();

	assert!(!provider.applies(&ctx(&block)));
	assert_eq!(provider.lines(&ctx(&block)), None);
}

#[test]
fn same_name_other_domain_does_not_match() {
	// `age` 0..=7 is not one of the candidates even though the name matches.
	let block = MemoryBlock::new("minecraft:wheat", BlockPos::ORIGIN).with(blockinfo_primitives::properties::AGE_7, 7);
	assert!(!age().applies(&ctx(&block)));
}

#[test]
fn property_formatter_rejects_empty_property_list() {
	assert_eq!(
		SimpleProvider::property("broken", "Broken: %s", &[]).unwrap_err(),
		ProviderError::NoProperties { key: "broken" }
	);
}

#[test]
fn property_formatter_rejects_template_without_placeholder() {
	assert_eq!(
		SimpleProvider::property("broken", "Broken", &[WATERLOGGED]).unwrap_err(),
		ProviderError::MissingPlaceholder {
			key: "broken",
			format: "Broken",
		}
	);
}

#[test]
fn custom_provider_runs_predicate_and_generator() {
	let provider = SimpleProvider::custom(|ctx| ctx.pos.y < 0, |ctx| format!("Depth: {}", -ctx.pos.y));
	let deep = MemoryBlock::new("minecraft:deepslate", BlockPos::new(0, -12, 0));
	let shallow = MemoryBlock::new("minecraft:stone", BlockPos::new(0, 12, 0));

	assert!(provider.applies(&ctx(&deep)));
	assert_eq!(provider.lines(&ctx(&deep)), Some(vec!["Depth: 12".to_string()]));
	assert!(!provider.applies(&ctx(&shallow)));
}

#[test]
fn custom_provider_drops_blank_output() {
	let provider = SimpleProvider::custom(|_| true, |_| "   ".to_string());
	let block = MemoryBlock::new("minecraft:air", BlockPos::ORIGIN);
	assert_eq!(provider.lines(&ctx(&block)), None);
}

#[test]
fn unresolved_target_has_no_context() {
	let block = MemoryBlock::new("minecraft:stone", BlockPos::ORIGIN).unresolved();
	assert!(AnnotationContext::resolve(&block).is_none());
}

#[test]
fn def_constructors_carry_metadata() {
	let def = ProviderDef::property(Specificity::Block, "waterloggedtext", "Waterlogged: %s", &[WATERLOGGED])
		.unwrap()
		.inactive();
	assert_eq!(def.key, "waterloggedtext");
	assert_eq!(def.specificity, Specificity::Block);
	assert!(!def.default_active);

	let err = ProviderDef::property(Specificity::Block, "empty", "Empty: %s", &[]).unwrap_err();
	assert_eq!(err, ProviderError::NoProperties { key: "empty" });
}
