/*!
# HTAttr: Serialization
*/

use crate::AttributeMap;



/// # Attributes to String.
///
/// Render an attribute map into a literal HTML attribute string fragment,
/// ready to be pasted directly after a tag name.
///
/// The rules, in walking order:
///
/// * Entries render in insertion order;
/// * `false` and null values mean "attribute absent" and emit nothing;
/// * Boolean `true` renders as a bare name (`disabled`), unless the name
///   carries the `data-` prefix, in which case the value is spelled out
///   (`data-x="true"`);
/// * Empty text always renders as a bare name, `data-` prefix or not;
/// * Everything else renders as `name="value"`, with literal `"` characters
///   escaped to `&quot;`;
/// * Non-empty output carries exactly one leading space; if nothing
///   qualified, the result is empty (no space).
///
/// This cannot fail: every value has a text form, however degenerate.
///
/// ## Examples
///
/// ```
/// use htattr::AttributeMap;
///
/// let mut attrs = AttributeMap::new();
/// attrs.set("title", "a\"b");
///
/// assert_eq!(htattr::attrs_to_string(&attrs), " title=\"a&quot;b\"");
/// ```
#[must_use]
pub fn attrs_to_string(attrs: &AttributeMap) -> String {
	let mut out = String::new();

	for (name, value) in attrs.iter() {
		if value.is_absent() { continue; }

		// Tokens are space-separated; starting each with a space gives the
		// joined-plus-leading-space shape in one go.
		out.push(' ');
		out.push_str(name);

		// Bare name or name="value"?
		if (name.starts_with("data-") || ! value.is_true()) && ! value.is_empty_text() {
			out.push_str("=\"");
			push_esc_attr(&mut out, &value.to_text());
			out.push('"');
		}
	}

	out
}

/// # Write Escaped Attribute Value.
///
/// Only the wrapping character needs encoding here; `&`, `<`, `'`, etc.
/// pass through untouched. This is quoting safety, not HTML escaping.
fn push_esc_attr(out: &mut String, txt: &str) {
	let mut rest = txt;
	while let Some(pos) = rest.find('"') {
		out.push_str(&rest[..pos]);
		out.push_str("&quot;");
		rest = &rest[pos + 1..];
	}
	out.push_str(rest);
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::AttrValue;

	/// # One-Entry Map.
	fn one(name: &str, value: AttrValue) -> AttributeMap {
		let mut out = AttributeMap::new();
		out.set(name, value);
		out
	}

	#[test]
	fn t_absent() {
		// No qualifying entries, no output, and no leading space.
		assert_eq!(attrs_to_string(&AttributeMap::new()), "");
		assert_eq!(attrs_to_string(&one("disabled", AttrValue::Bool(false))), "");
		assert_eq!(attrs_to_string(&one("hidden", AttrValue::Null)), "");

		let mut attrs = AttributeMap::new();
		attrs.set("disabled", false);
		attrs.set("hidden", AttrValue::Null);
		assert_eq!(attrs_to_string(&attrs), "");
	}

	#[test]
	fn t_bare() {
		assert_eq!(attrs_to_string(&one("disabled", AttrValue::Bool(true))), " disabled");

		// Empty text renders bare rather than disappearing, on both sides of
		// the data- divide.
		assert_eq!(attrs_to_string(&one("title", AttrValue::from(""))), " title");
		assert_eq!(attrs_to_string(&one("data-test", AttrValue::from(""))), " data-test");
	}

	#[test]
	fn t_value_clause() {
		for (name, value, expected) in [
			("class", AttrValue::from("foo"), " class=\"foo\""),
			("title", AttrValue::from("a\"b"), " title=\"a&quot;b\""),
			("width", AttrValue::Int(0), " width=\"0\""),
			("tabindex", AttrValue::Int(-1), " tabindex=\"-1\""),
			// Text that merely spells "false" is still text.
			("draggable", AttrValue::from("false"), " draggable=\"false\""),
		] {
			assert_eq!(attrs_to_string(&one(name, value)), expected);
		}
	}

	#[test]
	fn t_clause_corners() {
		// All four corners of the clause decision: data-prefix × boolean
		// true, and their complements.
		for (name, value, expected) in [
			("data-test", AttrValue::Bool(true), " data-test=\"true\""),
			("data-test", AttrValue::from("x"), " data-test=\"x\""),
			("checked", AttrValue::Bool(true), " checked"),
			("checked", AttrValue::from("x"), " checked=\"x\""),
		] {
			assert_eq!(attrs_to_string(&one(name, value)), expected);
		}
	}

	#[test]
	fn t_escape() {
		let mut out = String::new();
		push_esc_attr(&mut out, "a\"b\"\"c");
		assert_eq!(out, "a&quot;b&quot;&quot;c");

		// Nothing else gets touched.
		out.truncate(0);
		push_esc_attr(&mut out, "<b>&amp;'");
		assert_eq!(out, "<b>&amp;'");
	}

	#[test]
	fn t_order() {
		let mut attrs = AttributeMap::new();
		attrs.set("name", "viewport");
		attrs.set("hidden", false);
		attrs.set("content", "width=device-width");
		attrs.set("data-hid", "vp");
		attrs.set("defer", true);

		assert_eq!(
			attrs_to_string(&attrs),
			" name=\"viewport\" content=\"width=device-width\" data-hid=\"vp\" defer",
		);
	}
}
