/*!
# HTAttr: Errors
*/

use argyle::ArgyleError;
use fyi_msg::ProglessError;
use std::{
	error::Error,
	fmt,
};



/// # Help Text.
const HELP: &str = concat!(r#"
    .--------.
   ( <head/> )    "#, "\x1b[38;5;199mHTAttr\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
    `--------'    Fast, safe rendering of head-tag
      |    |      attribute fragments.

USAGE:
    htattr [FLAGS] [OPTIONS] <PATH(S)>...

FLAGS:
    -h, --help        Print help information and exit.
    -p, --progress    Show progress bar while rendering.
    -V, --version     Print program version and exit.

OPTIONS:
    -l, --list <FILE> Read (absolute) file and/or directory paths from this
                      text file — or STDIN if "-" — one entry per line,
                      instead of or in addition to the trailing <PATH(S)>.

ARGS:
    <PATH(S)>...      Any number of files and directories to crawl and
                      render.
"#);



#[expect(clippy::missing_docs_in_private_items, reason = "Self-explanatory.")]
#[derive(Debug, Copy, Clone)]
/// # Generic Error.
pub(super) enum HtattrError {
	Argue(ArgyleError),
	EmptyFile,
	NoDescriptors,
	Parse,
	Progress(ProglessError),
	Read,
	Save,
	PrintHelp,    // Not an error.
	PrintVersion, // Not an error.
}

impl AsRef<str> for HtattrError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for HtattrError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Error for HtattrError {}

impl From<ArgyleError> for HtattrError {
	fn from(src: ArgyleError) -> Self {
		match src {
			ArgyleError::WantsHelp => Self::PrintHelp,
			ArgyleError::WantsVersion => Self::PrintVersion,
			_ => Self::Argue(src),
		}
	}
}

impl From<ProglessError> for HtattrError {
	#[inline]
	fn from(src: ProglessError) -> Self { Self::Progress(src) }
}

impl HtattrError {
	/// # As Str.
	pub(super) const fn as_str(self) -> &'static str {
		match self {
			Self::Argue(e) => e.as_str(),
			Self::EmptyFile => "The file is empty.",
			Self::NoDescriptors => "No descriptor files were found.",
			Self::Parse => "Unable to parse the descriptor.",
			Self::Progress(e) => e.as_str(),
			Self::Read => "Unable to read the file.",
			Self::Save => "Unable to save the fragment.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("HTAttr v", env!("CARGO_PKG_VERSION")),
		}
	}
}
