/*!
# HTAttr: Attribute Values
*/

use std::borrow::Cow;



#[derive(Debug, Clone, PartialEq)]
/// # Attribute Value.
///
/// The loosely-typed value domain of a head-tag descriptor, spelled out: a
/// value is a boolean, null ("attribute absent"), text, or a number.
///
/// Keeping the variants explicit keeps the rendering rules explicit too;
/// there is no truthy/falsy guesswork anywhere downstream. `Bool(true)` is
/// boolean true and `Text("true")` is four letters of text; they render
/// differently and that's that.
pub enum AttrValue {
	/// # Boolean.
	Bool(bool),

	/// # Null/Absent.
	Null,

	/// # Text.
	Text(String),

	/// # Integer.
	Int(i64),

	/// # Float.
	Float(f64),
}

impl Default for AttrValue {
	#[inline]
	fn default() -> Self { Self::Null }
}

impl From<bool> for AttrValue {
	#[inline]
	fn from(src: bool) -> Self { Self::Bool(src) }
}

impl From<&str> for AttrValue {
	#[inline]
	fn from(src: &str) -> Self { Self::Text(src.to_owned()) }
}

impl From<String> for AttrValue {
	#[inline]
	fn from(src: String) -> Self { Self::Text(src) }
}

impl From<i64> for AttrValue {
	#[inline]
	fn from(src: i64) -> Self { Self::Int(src) }
}

impl From<f64> for AttrValue {
	#[inline]
	fn from(src: f64) -> Self { Self::Float(src) }
}

impl<T: Into<Self>> From<Option<T>> for AttrValue {
	#[inline]
	fn from(src: Option<T>) -> Self {
		src.map_or(Self::Null, Into::into)
	}
}

impl From<&serde_json::Value> for AttrValue {
	/// # From JSON.
	///
	/// Every JSON value maps onto _something_; arrays and objects have no
	/// natural attribute form, so they coerce to their compact JSON text
	/// rather than erroring out.
	fn from(src: &serde_json::Value) -> Self {
		match src {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(b) => Self::Bool(*b),
			serde_json::Value::Number(n) =>
				if let Some(n) = n.as_i64() { Self::Int(n) }
				else { n.as_f64().map_or(Self::Null, Self::Float) },
			serde_json::Value::String(s) => Self::Text(s.clone()),
			other => Self::Text(other.to_string()),
		}
	}
}

impl AttrValue {
	#[must_use]
	/// # Is Absent?
	///
	/// Boolean `false` and null both mean "attribute absent"; entries with
	/// such values emit nothing at all, not even a bare name.
	pub const fn is_absent(&self) -> bool {
		matches!(self, Self::Bool(false) | Self::Null)
	}

	#[must_use]
	/// # Is Boolean True?
	///
	/// This is strict: only `Bool(true)` qualifies. `Text("true")`, `Int(1)`,
	/// etc. do not.
	pub const fn is_true(&self) -> bool {
		matches!(self, Self::Bool(true))
	}

	#[must_use]
	/// # Is Empty Text?
	pub fn is_empty_text(&self) -> bool {
		matches!(self, Self::Text(s) if s.is_empty())
	}

	#[must_use]
	/// # As Text.
	///
	/// Coerce the value to its text representation. This is total; values
	/// with no natural text form come back empty rather than panicking.
	///
	/// Non-finite floats keep the spellings descriptor producers will have
	/// used (`NaN`, `Infinity`, `-Infinity`) rather than Rust's shorter
	/// `inf`.
	pub fn to_text(&self) -> Cow<'_, str> {
		match self {
			Self::Bool(true) => Cow::Borrowed("true"),
			Self::Bool(false) => Cow::Borrowed("false"),
			Self::Null => Cow::Borrowed(""),
			Self::Text(s) => Cow::Borrowed(s),
			Self::Int(n) => Cow::Owned(n.to_string()),
			Self::Float(n) =>
				if n.is_nan() { Cow::Borrowed("NaN") }
				else if n.is_infinite() {
					if n.is_sign_positive() { Cow::Borrowed("Infinity") }
					else { Cow::Borrowed("-Infinity") }
				}
				else { Cow::Owned(n.to_string()) },
		}
	}
}
