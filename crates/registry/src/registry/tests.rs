use blockinfo_primitives::KeyCombo;
use pretty_assertions::assert_eq;

use super::*;

fn def(specificity: Specificity, key: &'static str) -> ProviderDef {
	ProviderDef::custom(specificity, key, |_| true, |_| String::from("x"))
}

fn build(defs: impl IntoIterator<Item = ProviderDef>) -> ProviderRegistry {
	let mut builder = RegistryBuilder::new();
	for d in defs {
		builder.register(d).unwrap();
	}
	builder.finalize_setup()
}

#[test]
fn specific_sorts_before_block_before_all() {
	let registry = build([
		def(Specificity::All, "coords"),
		def(Specificity::Block, "facing"),
		def(Specificity::Specific, "infested"),
	]);

	assert_eq!(registry.keys().collect::<Vec<_>>(), ["infested", "facing", "coords"]);
	assert!(registry.is_sorted());
}

#[test]
fn equal_classes_keep_registration_order() {
	let registry = build([
		def(Specificity::Block, "b1"),
		def(Specificity::All, "a1"),
		def(Specificity::Block, "b2"),
		def(Specificity::Specific, "s1"),
		def(Specificity::All, "a2"),
		def(Specificity::Block, "b3"),
		def(Specificity::Specific, "s2"),
	]);

	assert_eq!(registry.keys().collect::<Vec<_>>(), ["s1", "s2", "b1", "b2", "b3", "a1", "a2"]);

	let indices: Vec<_> = registry
		.iter()
		.filter(|e| e.specificity() == Specificity::Block)
		.map(ProviderEntry::registration_index)
		.collect();
	assert_eq!(indices, [0, 2, 5]);
}

#[test]
fn every_specific_precedes_every_all() {
	let registry = ProviderRegistry::with_builtins().unwrap();
	let last_specific = registry
		.all_providers()
		.iter()
		.rposition(|e| e.specificity() == Specificity::Specific)
		.unwrap();
	let first_all = registry.iter().position(|e| e.specificity() == Specificity::All).unwrap();
	assert!(last_specific < first_all);
}

#[test]
fn duplicate_key_is_rejected() {
	let mut builder = RegistryBuilder::new();
	builder.register(def(Specificity::All, "coords")).unwrap();

	let err = builder.register(def(Specificity::Specific, "coords")).unwrap_err();
	assert_eq!(err, RegistryError::DuplicateKey { key: "coords" });
	assert_eq!(builder.len(), 1);
}

#[test]
fn empty_key_is_rejected() {
	let mut builder = RegistryBuilder::new();
	assert_eq!(builder.register(def(Specificity::All, "")).unwrap_err(), RegistryError::EmptyKey);
	assert!(builder.is_empty());
}

#[test]
fn builtins_finalize_in_documented_order() {
	let registry = ProviderRegistry::with_builtins().unwrap();
	assert_eq!(
		registry.keys().collect::<Vec<_>>(),
		[
			"noteblocktext",
			"signtext",
			"infested",
			"redstonetext",
			"facingtext",
			"blocklevel",
			"waterloggedtext",
			"opentext",
			"persistent",
			"distancetext",
			"layerstext",
			"dripleaftilttext",
			"chargestext",
			"bitestext",
			"agetext",
			"beetext",
			"leveltext",
			"coordinatestext",
		]
	);
	assert!(registry.iter().all(ProviderEntry::is_active));
}

#[test]
fn settings_projections_follow_render_order() {
	let registry = build([def(Specificity::All, "coords"), def(Specificity::Specific, "infested")]);

	let active: Vec<_> = registry.active_settings().iter().map(|s| s.key()).collect();
	let hotkeys: Vec<_> = registry.hotkey_settings().iter().map(|s| s.key()).collect();
	assert_eq!(active, ["infested", "coords"]);
	assert_eq!(hotkeys, ["infested", "coords"]);
	assert_eq!(registry.hotkeys(), vec![HotkeySettings::default(); 2]);
}

#[test]
fn setting_handles_share_state_with_the_entry() {
	let registry = build([def(Specificity::All, "coords")]);
	let handle = registry.active_settings()[0].clone();

	handle.set(false);
	assert!(!registry.get("coords").unwrap().is_active());

	assert!(registry.set_active("coords", true));
	assert!(handle.get());
	assert!(!registry.set_active("missing", true));
}

#[test]
fn inactive_defs_start_switched_off() {
	let registry = build([def(Specificity::All, "coords").inactive()]);
	let entry = registry.get("coords").unwrap();
	assert!(!entry.is_active());
	assert!(!entry.active().default_value());
}

#[test]
fn hotkey_toggles_only_bound_providers() {
	let registry = build([
		def(Specificity::All, "coords"),
		def(Specificity::Block, "facing"),
		def(Specificity::Specific, "infested"),
	]);
	let ctrl_i: KeyCombo = "ctrl-i".parse().unwrap();
	registry.get("infested").unwrap().hotkey().set(HotkeySettings::new([ctrl_i]));
	registry
		.get("facing")
		.unwrap()
		.hotkey()
		.set(HotkeySettings::new([KeyCombo::char('f'), ctrl_i]));

	assert_eq!(registry.toggle_for_hotkey(&ctrl_i), ["infested", "facing"]);
	assert!(!registry.get("infested").unwrap().is_active());
	assert!(!registry.get("facing").unwrap().is_active());
	assert!(registry.get("coords").unwrap().is_active());

	assert_eq!(registry.toggle_for_hotkey(&KeyCombo::char('f')), ["facing"]);
	assert!(registry.get("facing").unwrap().is_active());
	assert!(registry.toggle_for_hotkey(&KeyCombo::char('z')).is_empty());
}

#[test]
fn exclusive_flag_is_reported_per_combo() {
	let registry = build([def(Specificity::All, "coords"), def(Specificity::Block, "facing")]);
	let ctrl_c: KeyCombo = "ctrl-c".parse().unwrap();
	registry.get("coords").unwrap().hotkey().set(HotkeySettings {
		keys: vec![ctrl_c],
		exclusive: true,
	});
	registry
		.get("facing")
		.unwrap()
		.hotkey()
		.set(HotkeySettings::new([KeyCombo::char('f')]));

	assert!(registry.hotkey_is_exclusive(&ctrl_c));
	assert!(!registry.hotkey_is_exclusive(&KeyCombo::char('f')));
	assert!(!registry.hotkey_is_exclusive(&KeyCombo::char('z')));
}

#[test]
fn broken_builtin_style_definition_surfaces_as_registry_error() {
	let mut builder = RegistryBuilder::new();
	let result = ProviderDef::property(Specificity::Block, "agetext", "Age: %s", &[])
		.map_err(RegistryError::from)
		.and_then(|d| builder.register(d));
	assert_eq!(
		result.unwrap_err(),
		RegistryError::Provider(crate::error::ProviderError::NoProperties { key: "agetext" })
	);
}
