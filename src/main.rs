/*!
# `HTAttr`

`HTAttr` is a batch renderer for head-tag attribute descriptors. Feed it
file and/or directory paths and it will crawl them for `.json` descriptor
files, render each attribute map into its literal HTML attribute string
fragment, and save the results to a sibling `.html` file.

A descriptor file holds either a single JSON object (one attribute map) or
an array of such objects. Key order in the document is the order the
attributes render in. The value rules are the library's: `false`/null
values vanish, boolean `true` and empty text render bare (except that
`data-` attributes always spell their values out), and everything else
renders as `name="value"` with double quotes escaped to `&quot;`.

The merging and deduplication of descriptors is expected to have already
happened upstream; this tool renders what it is given.

## Use

```bash
# Render one descriptor.
htattr /path/to/og.json

# Recursively render every .json descriptor in a directory.
htattr /path/to

# Do the same thing but with a progress bar.
htattr -p /path/to

# For a full list of options, run help:
htattr -h
```

Files that cannot be read or parsed are skipped; the rest of the batch
carries on without them.
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod error;

use argyle::{
	Argue,
	FLAG_HELP,
	FLAG_REQUIRED,
	FLAG_VERSION,
};
use dowser::Dowser;
use error::HtattrError;
use fyi_msg::{
	Msg,
	MsgKind,
	Progless,
};
use htattr::AttributeMap;
use rayon::iter::{
	IntoParallelRefIterator,
	ParallelIterator,
};
use std::{
	ffi::OsStr,
	os::unix::ffi::OsStrExt,
	path::Path,
};



/// Main.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(e @ (HtattrError::PrintHelp | HtattrError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.as_str()).die(1);
		},
	}
}

#[inline]
/// Actual Main.
fn _main() -> Result<(), HtattrError> {
	// Parse CLI arguments.
	let args = Argue::new(FLAG_HELP | FLAG_REQUIRED | FLAG_VERSION)?
		.with_list();

	// Put it all together!
	let paths = Dowser::default()
		.with_paths(args.args().iter().map(|x| OsStr::from_bytes(x.as_ref())))
		.into_vec_filtered(|p: &Path| p.extension()
			.map_or(false, |e| e.as_bytes().eq_ignore_ascii_case(b"json"))
		);
	if paths.is_empty() {
		return Err(HtattrError::NoDescriptors);
	}

	// Sexy run-through.
	if args.switch2(b"-p", b"--progress") {
		// Boot up a progress bar.
		let progress = Progless::try_from(paths.len())?
			.with_title(Some(Msg::custom("HTAttr", 199, "Rendering fragments…")));

		// Process!
		paths.par_iter().for_each(|x| {
			let tmp = x.to_string_lossy();
			progress.add(&tmp);
			let _res = render_file(x);
			progress.remove(&tmp);
		});

		// Finish up.
		progress.finish();
		progress.summary(MsgKind::Crunched, "descriptor", "descriptors").print();
	}
	else {
		paths.par_iter().for_each(|x| {
			let _res = render_file(x);
		});
	}

	Ok(())
}

/// # Render One Descriptor File.
///
/// Read and parse the JSON, render each attribute map to its fragment, and
/// save the lot to a sibling file with an `.html` extension.
fn render_file(src: &Path) -> Result<(), HtattrError> {
	let raw = std::fs::read_to_string(src).map_err(|_| HtattrError::Read)?;
	if raw.trim().is_empty() {
		return Err(HtattrError::EmptyFile);
	}

	let parsed: serde_json::Value = serde_json::from_str(&raw)
		.map_err(|_| HtattrError::Parse)?;
	let out = render_descriptors(&parsed).ok_or(HtattrError::Parse)?;

	write_atomic::write_file(&src.with_extension("html"), out.as_bytes())
		.map_err(|_| HtattrError::Save)
}

/// # Render Descriptor Value(s).
///
/// A descriptor file holds either one JSON object (one attribute map) or
/// an array of objects. The output holds one fragment per map, each
/// newline-terminated. Anything else is a parse failure.
fn render_descriptors(src: &serde_json::Value) -> Option<String> {
	let mut out = String::new();

	match src {
		serde_json::Value::Object(_) => {
			out.push_str(&htattr::attrs_to_string(&AttributeMap::from_json(src)?));
			out.push('\n');
		},
		serde_json::Value::Array(list) => {
			for entry in list {
				out.push_str(&htattr::attrs_to_string(&AttributeMap::from_json(entry)?));
				out.push('\n');
			}
		},
		_ => return None,
	}

	Some(out)
}
