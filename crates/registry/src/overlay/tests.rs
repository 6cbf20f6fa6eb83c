use std::sync::atomic::{AtomicBool, Ordering};

use blockinfo_primitives::properties::{AGE_7, FACING, HORIZONTAL_FACING, WATERLOGGED};
use blockinfo_primitives::{BlockPos, Direction, Vec3};
use pretty_assertions::assert_eq;

use super::*;
use crate::provider::ProviderDef;
use crate::registry::RegistryBuilder;
use crate::specificity::Specificity;
use crate::target::MemoryBlock;

fn coords_and_infested() -> InfoOverlay {
	let mut builder = RegistryBuilder::new();
	builder
		.register(ProviderDef::custom(Specificity::All, "coords", |_| true, |ctx| {
			format!("X: {}\nY: {}\nZ: {}", ctx.pos.x, ctx.pos.y, ctx.pos.z)
		}))
		.unwrap();
	builder
		.register(ProviderDef::custom(Specificity::Specific, "infested", |ctx| ctx.state.is_infested(), |_| {
			"Infested".to_string()
		}))
		.unwrap();
	InfoOverlay::new(builder.finalize_setup())
}

fn infested_at_123() -> MemoryBlock {
	MemoryBlock::new("minecraft:infested_stone", BlockPos::new(1, 2, 3))
}

#[test]
fn specific_lines_render_before_generic_ones() {
	let overlay = coords_and_infested();
	let mut sink = RecordingSink::default();

	assert!(overlay.render(&infested_at_123(), &mut sink));
	assert_eq!(
		sink.calls,
		[RenderLineSet {
			anchor: Vec3::new(1.5, 2.5, 3.5),
			lines: vec!["Infested".to_string(), "X: 1\nY: 2\nZ: 3".to_string()],
		}]
	);

	overlay.registry.set_active("infested", false);
	let set = overlay.collect(&infested_at_123()).unwrap();
	assert_eq!(set.lines, ["X: 1\nY: 2\nZ: 3"]);
}

#[test]
fn master_switch_off_draws_nothing() {
	let overlay = coords_and_infested();
	overlay.settings.enabled.set(false);
	let mut sink = RecordingSink::default();

	assert!(!overlay.render(&infested_at_123(), &mut sink));
	assert!(sink.calls.is_empty());

	overlay.settings.enabled.set(true);
	assert!(overlay.render(&infested_at_123(), &mut sink));
	assert_eq!(sink.calls.len(), 1);
}

#[test]
fn no_applicable_provider_means_no_draw_call() {
	let overlay = coords_and_infested();
	overlay.registry.set_active("coords", false);
	let mut sink = RecordingSink::default();

	let plain = MemoryBlock::new("minecraft:stone", BlockPos::new(1, 2, 3));
	assert!(!overlay.render(&plain, &mut sink));
	assert!(sink.calls.is_empty());
}

#[test]
fn unresolved_target_draws_nothing() {
	let overlay = coords_and_infested();
	let mut sink = RecordingSink::default();

	assert!(!overlay.render(&infested_at_123().unresolved(), &mut sink));
	assert!(sink.calls.is_empty());
}

#[test]
fn builtins_annotate_a_crop() {
	let overlay = InfoOverlay::new(ProviderRegistry::with_builtins().unwrap());
	let wheat = MemoryBlock::new("minecraft:wheat", BlockPos::new(-4, 70, 12)).with(AGE_7, 5);

	let set = overlay.collect(&wheat).unwrap();
	assert_eq!(set.lines, ["Age: 5", "X: -4\nY: 70\nZ: 12"]);
	assert_eq!(set.anchor, Vec3::new(-3.5, 70.5, 12.5));
}

#[test]
fn builtins_stack_block_properties_in_registration_order() {
	let overlay = InfoOverlay::new(ProviderRegistry::with_builtins().unwrap());
	overlay.registry.set_active("coordinatestext", false);
	let stairs = MemoryBlock::new("minecraft:oak_stairs", BlockPos::ORIGIN)
		.with(HORIZONTAL_FACING, Direction::South)
		.with(WATERLOGGED, true);

	let set = overlay.collect(&stairs).unwrap();
	assert_eq!(set.lines, ["Facing: south", "Waterlogged: true"]);

	let dispenser = MemoryBlock::new("minecraft:dispenser", BlockPos::ORIGIN).with(FACING, Direction::Up);
	assert_eq!(overlay.collect(&dispenser).unwrap().lines, ["Facing: up"]);
}

#[test]
fn toggles_from_another_thread_never_disturb_rendering() {
	let overlay = coords_and_infested();
	let block = infested_at_123();
	let done = AtomicBool::new(false);

	std::thread::scope(|s| {
		s.spawn(|| {
			for _ in 0..500 {
				overlay.registry.get("infested").unwrap().active().toggle();
			}
			done.store(true, Ordering::Release);
		});

		while !done.load(Ordering::Acquire) {
			let set = overlay.collect(&block).unwrap();
			assert_eq!(set.lines.last().map(String::as_str), Some("X: 1\nY: 2\nZ: 3"));
			assert!(matches!(set.lines.len(), 1 | 2));
		}
	});

	// 500 flips leave the flag where it started.
	assert!(overlay.registry.get("infested").unwrap().is_active());
}
