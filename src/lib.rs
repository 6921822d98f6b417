/*!
# HTAttr: Library

This library turns the final per-tag attribute mapping of a head/meta-tag
pipeline into a literal HTML attribute string fragment.

The merging and deduplication of tag descriptors is somebody else's problem;
by the time a map reaches this crate, every entry is final. What happens here
is purely textual:

* `false` and null values are treated as "attribute absent" and emit nothing;
* boolean `true` and empty text render as bare names (`disabled`), except
  that `data-` attributes always spell their values out (`data-x="true"`);
* every other value renders as `name="value"`, with literal double quotes
  escaped to `&quot;` and nothing else touched;
* insertion order is preserved, and non-empty output carries exactly one
  leading space so it can be pasted directly after a tag name.

## Examples

```
use htattr::{AttrValue, AttributeMap};

let mut attrs = AttributeMap::new();
attrs.set("class", "foo");
attrs.set("disabled", true);
attrs.set("hidden", false);
attrs.set("data-test", true);

assert_eq!(
	htattr::attrs_to_string(&attrs),
	r#" class="foo" disabled data-test="true""#,
);

// Nothing qualifying, nothing rendered (and no leading space).
let empty: AttributeMap = [("hidden", AttrValue::Bool(false))].into_iter().collect();
assert_eq!(htattr::attrs_to_string(&empty), "");
```
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
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(unused_crate_dependencies)]



pub mod attrs;
pub mod script;
mod ser;
pub mod value;

pub use attrs::AttributeMap;
pub use ser::attrs_to_string;
pub use value::AttrValue;
