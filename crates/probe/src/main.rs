//! Block info probe.
//!
//! Builds the built-in annotation registry, applies the user's config and
//! prints what the overlay would draw for a block described on the command
//! line:
//!
//! ```text
//! blockinfo-probe --block minecraft:wheat --pos 10,64,-3 --prop age=5
//! ```

use std::io::Write;
use std::path::PathBuf;

use blockinfo_config::Config;
use blockinfo_primitives::{BlockPos, Vec3, properties};
use blockinfo_registry::{InfoOverlay, MemoryBlock, ProviderRegistry, SignText, TextSink};
use clap::Parser;
use tracing::{debug, info, warn};

/// Probe command line arguments.
#[derive(Parser, Debug)]
#[command(name = "blockinfo-probe")]
#[command(about = "Print the block info overlay for a described block")]
struct Args {
	/// Config file (defaults to the user config directory)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Namespaced block id
	#[arg(short, long, default_value = "minecraft:stone")]
	block: String,

	/// Block position as x,y,z
	#[arg(short, long, value_parser = parse_pos, default_value = "0,0,0", allow_hyphen_values = true)]
	pos: BlockPos,

	/// Block-state property as name=value (repeatable)
	#[arg(long = "prop", value_name = "NAME=VALUE")]
	props: Vec<String>,

	/// Front sign line (repeatable)
	#[arg(long = "sign", value_name = "TEXT")]
	sign: Vec<String>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum ProbeError {
	#[error("property {0:?} is not of the form name=value")]
	MalformedProperty(String),
	#[error("no known property {name:?} accepts the value {value:?}")]
	UnknownProperty { name: String, value: String },
}

/// Writes each draw call to stdout.
struct StdoutSink<W: Write> {
	out: W,
}

impl<W: Write> TextSink for StdoutSink<W> {
	fn draw_lines(&mut self, lines: &[String], anchor: Vec3) {
		let mut write = || -> std::io::Result<()> {
			writeln!(self.out, "@ {anchor}")?;
			for line in lines.iter().flat_map(|l| l.lines()) {
				writeln!(self.out, "  {line}")?;
			}
			Ok(())
		};
		if let Err(e) = write() {
			warn!(error = %e, "failed to write overlay lines");
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let registry = ProviderRegistry::with_builtins()?;
	let overlay = InfoOverlay::new(registry);

	let config_path = args.config.clone().or_else(blockinfo_config::default_config_path);
	if let Some(path) = config_path.filter(|p| args.config.is_some() || p.exists()) {
		let config = Config::load(&path)?;
		for warning in config.warnings.iter().chain(&config.apply(&overlay.registry, &overlay.settings)) {
			warn!(path = %path.display(), "{warning}");
		}
	}

	let block = describe_block(&args)?;
	debug!(block = %block.block_id, pos = %block.pos, "probing block");

	let mut sink = StdoutSink {
		out: std::io::stdout().lock(),
	};
	if !overlay.render(&block, &mut sink) {
		info!("nothing to show for this block");
	}

	Ok(())
}

fn describe_block(args: &Args) -> Result<MemoryBlock, ProbeError> {
	let mut block = MemoryBlock::new(args.block.clone(), args.pos);

	for prop in &args.props {
		let (name, value) = prop
			.split_once('=')
			.ok_or_else(|| ProbeError::MalformedProperty(prop.clone()))?;
		let (property, value) =
			properties::resolve(name.trim(), value.trim()).ok_or_else(|| ProbeError::UnknownProperty {
				name: name.to_string(),
				value: value.to_string(),
			})?;
		block.set(property, value);
	}

	if !args.sign.is_empty() {
		block = block.with_sign(SignText::new(args.sign.iter().cloned()));
	}

	Ok(block)
}

fn parse_pos(s: &str) -> Result<BlockPos, String> {
	let coords = s
		.split(',')
		.map(|c| c.trim().parse::<i32>().map_err(|e| format!("{c:?}: {e}")))
		.collect::<Result<Vec<_>, _>>()?;
	match coords[..] {
		[x, y, z] => Ok(BlockPos::new(x, y, z)),
		_ => Err(format!("expected x,y,z, got {s:?}")),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("BLOCKINFO_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("blockinfo=debug,info")
		} else {
			EnvFilter::new("blockinfo=info,warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_positions() {
		assert_eq!(parse_pos("1,2,3"), Ok(BlockPos::new(1, 2, 3)));
		assert_eq!(parse_pos(" -4, 70 ,12"), Ok(BlockPos::new(-4, 70, 12)));
		assert!(parse_pos("1,2").is_err());
		assert!(parse_pos("1,2,x").is_err());
	}

	#[test]
	fn describes_block_from_args() {
		let args = Args::parse_from([
			"blockinfo-probe",
			"--block",
			"minecraft:note_block",
			"--pos",
			"-1,2,3",
			"--prop",
			"note=6",
			"--prop",
			"instrument=bell",
		]);
		let block = describe_block(&args).unwrap();
		let overlay = InfoOverlay::new(ProviderRegistry::with_builtins().unwrap());

		let set = overlay.collect(&block).unwrap();
		assert_eq!(set.lines, ["Note: C4 (6)", "Instrument: bell", "X: -1\nY: 2\nZ: 3"]);
	}

	#[test]
	fn rejects_unknown_properties() {
		let args = Args::parse_from(["blockinfo-probe", "--prop", "colour=red"]);
		assert!(matches!(describe_block(&args), Err(ProbeError::UnknownProperty { .. })));

		let args = Args::parse_from(["blockinfo-probe", "--prop", "age"]);
		assert!(matches!(describe_block(&args), Err(ProbeError::MalformedProperty(_))));
	}

	#[test]
	fn stdout_sink_splits_multiline_entries() {
		let mut sink = StdoutSink { out: Vec::new() };
		sink.draw_lines(&["Infested".to_string(), "X: 1\nY: 2".to_string()], BlockPos::new(1, 2, 3).center());
		assert_eq!(
			String::from_utf8(sink.out).unwrap(),
			"@ (1.50, 2.50, 3.50)\n  Infested\n  X: 1\n  Y: 2\n"
		);
	}
}
