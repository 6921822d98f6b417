/*!
# HTAttr: Attribute Maps
*/

use crate::AttrValue;



#[derive(Debug, Clone, Default, PartialEq)]
/// # Attribute Map.
///
/// An ordered name/value mapping representing one element's or fragment's
/// HTML attributes.
///
/// Insertion order is significant (rendering walks the entries front to
/// back), so the backing store is a plain pair list rather than a hash map.
/// Re-setting a name keeps its original position; attribute maps are small
/// enough that the linear lookups cost less than the bookkeeping they'd
/// replace.
pub struct AttributeMap(Vec<(String, AttrValue)>);

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeMap {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(src: I) -> Self {
		let mut out = Self::new();
		out.extend(src);
		out
	}
}

impl<K: Into<String>, V: Into<AttrValue>> Extend<(K, V)> for AttributeMap {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, src: I) {
		for (k, v) in src { self.set(k, v); }
	}
}

impl AttributeMap {
	#[must_use]
	/// # New (Empty) Map.
	pub const fn new() -> Self { Self(Vec::new()) }

	#[must_use]
	/// # New Map With Capacity.
	pub fn with_capacity(cap: usize) -> Self { Self(Vec::with_capacity(cap)) }

	#[must_use]
	/// # From JSON Object.
	///
	/// Build a map from a parsed JSON object, keeping the document's key
	/// order. Returns `None` if the value is anything but an object.
	pub fn from_json(src: &serde_json::Value) -> Option<Self> {
		let obj = src.as_object()?;
		let mut out = Self::with_capacity(obj.len());
		for (k, v) in obj {
			out.set(k.as_str(), AttrValue::from(v));
		}
		Some(out)
	}

	/// # Set Value.
	///
	/// Insert a name/value pair, or replace the value in place, keeping the
	/// name's original position, if the name is already present.
	pub fn set<K: Into<String>, V: Into<AttrValue>>(&mut self, name: K, value: V) {
		let name = name.into();
		if let Some(pair) = self.0.iter_mut().find(|(k, _)| *k == name) {
			pair.1 = value.into();
		}
		else {
			self.0.push((name, value.into()));
		}
	}

	#[must_use]
	/// # Get Value.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.0.iter().find_map(|(k, v)| if k == name { Some(v) } else { None })
	}

	#[must_use]
	/// # Length.
	pub const fn len(&self) -> usize { self.0.len() }

	#[must_use]
	/// # Is Empty?
	pub const fn is_empty(&self) -> bool { self.0.is_empty() }

	/// # Iterate (In Insertion Order).
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}
}
