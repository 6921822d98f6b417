/*!
# HTAttr: Script Load Status

Head pipelines that inject external `<script>` tags usually want to know how
the load went. This module keeps that bookkeeping framework-free: a tracker
holds the current load status and pushes changes to subscriber callbacks,
while the event-to-status mapping is exposed on its own for callers wiring
handlers by hand. Message passing, nothing reactive.
*/

use std::fmt;



/// # Network Event Handlers.
///
/// The handler names whose firing moves a script's status. Anything else is
/// somebody else's event.
pub const NETWORK_EVENTS: [&str; 5] = [
	"onabort",
	"onerror",
	"onload",
	"onloadstart",
	"onprogress",
];



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Script Load Status.
pub enum ScriptStatus {
	#[default]
	/// # Not Yet Requested.
	AwaitingLoad,

	/// # Request Underway.
	Loading,

	/// # Loaded Successfully.
	Loaded,

	/// # Failed.
	Error,
}

impl AsRef<str> for ScriptStatus {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for ScriptStatus {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ScriptStatus {
	#[must_use]
	/// # As Str.
	///
	/// The wire spellings are camelCased because that's what descriptor
	/// producers and consumers already speak.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::AwaitingLoad => "awaitingLoad",
			Self::Loading => "loading",
			Self::Loaded => "loaded",
			Self::Error => "error",
		}
	}
}



#[must_use]
/// # Status For Event.
///
/// Map a fired handler name onto the status it implies: `onload` means
/// loaded, `onerror` means error, and any other network event means the
/// request is underway. Unknown names map to nothing at all.
pub fn status_for_event(event: &str) -> Option<ScriptStatus> {
	if ! NETWORK_EVENTS.contains(&event) { return None; }
	Some(match event {
		"onload" => ScriptStatus::Loaded,
		"onerror" => ScriptStatus::Error,
		_ => ScriptStatus::Loading,
	})
}



/// # Script Status Tracker.
///
/// One tracker per injected script. Events go in via [`ScriptTracker::handle_event`];
/// status changes come out through whatever callbacks were registered with
/// [`ScriptTracker::on_change`].
pub struct ScriptTracker {
	/// # Current Status.
	status: ScriptStatus,

	/// # Subscribers.
	listeners: Vec<Box<dyn FnMut(ScriptStatus)>>,
}

impl fmt::Debug for ScriptTracker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScriptTracker")
			.field("status", &self.status)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}

impl Default for ScriptTracker {
	#[inline]
	fn default() -> Self { Self::new() }
}

impl ScriptTracker {
	#[must_use]
	/// # New Tracker.
	///
	/// Trackers start out awaiting load.
	pub const fn new() -> Self {
		Self {
			status: ScriptStatus::AwaitingLoad,
			listeners: Vec::new(),
		}
	}

	#[must_use]
	/// # Current Status.
	pub const fn status(&self) -> ScriptStatus { self.status }

	#[must_use]
	/// # Loaded?
	pub const fn loaded(&self) -> bool {
		matches!(self.status, ScriptStatus::Loaded)
	}

	/// # Subscribe.
	///
	/// Register a callback to run on every status _change_. Repeated events
	/// that leave the status where it was do not fire.
	pub fn on_change<F: FnMut(ScriptStatus) + 'static>(&mut self, cb: F) {
		self.listeners.push(Box::new(cb));
	}

	/// # Handle Event.
	///
	/// Feed a fired handler name through the tracker, updating the status
	/// and notifying subscribers. Returns `true` if the status changed;
	/// unknown names and no-op repeats return `false`.
	pub fn handle_event(&mut self, event: &str) -> bool {
		let Some(next) = status_for_event(event) else { return false; };
		if next == self.status { return false; }

		self.status = next;
		for cb in &mut self.listeners { cb(next); }
		true
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use std::{
		cell::Cell,
		rc::Rc,
	};

	#[test]
	fn t_status_for_event() {
		assert_eq!(status_for_event("onload"), Some(ScriptStatus::Loaded));
		assert_eq!(status_for_event("onerror"), Some(ScriptStatus::Error));
		assert_eq!(status_for_event("onabort"), Some(ScriptStatus::Loading));
		assert_eq!(status_for_event("onloadstart"), Some(ScriptStatus::Loading));
		assert_eq!(status_for_event("onprogress"), Some(ScriptStatus::Loading));

		assert_eq!(status_for_event("onclick"), None);
		assert_eq!(status_for_event("load"), None);
		assert_eq!(status_for_event(""), None);
	}

	#[test]
	fn t_tracker() {
		let fired = Rc::new(Cell::new(0_u32));
		let fired2 = Rc::clone(&fired);

		let mut tracker = ScriptTracker::new();
		assert_eq!(tracker.status(), ScriptStatus::AwaitingLoad);
		assert!(! tracker.loaded());

		tracker.on_change(move |_| { fired2.set(fired2.get() + 1); });

		// Unknown events are ignored.
		assert!(! tracker.handle_event("onclick"));
		assert_eq!(fired.get(), 0);

		// A loadstart moves things along...
		assert!(tracker.handle_event("onloadstart"));
		assert_eq!(tracker.status(), ScriptStatus::Loading);
		assert_eq!(fired.get(), 1);

		// ...but a progress stream is not news.
		assert!(! tracker.handle_event("onprogress"));
		assert!(! tracker.handle_event("onprogress"));
		assert_eq!(fired.get(), 1);

		assert!(tracker.handle_event("onload"));
		assert_eq!(tracker.status(), ScriptStatus::Loaded);
		assert!(tracker.loaded());
		assert_eq!(fired.get(), 2);
	}

	#[test]
	fn t_error_path() {
		let mut tracker = ScriptTracker::default();
		assert!(tracker.handle_event("onerror"));
		assert_eq!(tracker.status(), ScriptStatus::Error);
		assert!(! tracker.loaded());
		assert_eq!(tracker.status().as_str(), "error");
	}
}
