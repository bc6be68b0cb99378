//! Identity events, background data loading, debounced search and notices.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use grantview_core::{GateAction, IdentityError, LoadError, Notice, OpenMode, RecordStore};

use super::state::{App, Focus};

/// How long a notice stays up unless dismissed.
pub(crate) const NOTICE_TTL: Duration = Duration::from_secs(5);

pub(crate) struct ActiveNotice {
	pub notice: Notice,
	pub expires_at: Instant,
}

/// Lifecycle of the grant data for the signed-in session.
pub(crate) enum DataState {
	Idle,
	Loading(Receiver<Result<RecordStore, LoadError>>),
	Ready,
	Failed(String),
}

impl<'a> App<'a> {
	/// Drain background work: the data loader, identity events, the pending
	/// search and notice expiry. A load started by an identity event is
	/// collected on a later pump.
	pub(crate) fn pump(&mut self, now: Instant) {
		self.pump_data_load();
		self.pump_identity_events(now);
		self.pump_search(now);
		self.expire_notice(now);
	}

	fn pump_identity_events(&mut self, now: Instant) {
		while let Ok(event) = self.identity_events.try_recv() {
			let outcome = self.gate.handle(event);
			match outcome.action {
				GateAction::LoadData => self.start_loading(),
				GateAction::ClearData => self.clear_session(),
				GateAction::None => {}
			}
			if let Some(notice) = outcome.notice {
				self.show_notice(notice, now);
			}
		}
	}

	/// Read the data file on a worker thread; a load already in flight wins.
	pub(crate) fn start_loading(&mut self) {
		if matches!(self.data, DataState::Loading(_)) {
			return;
		}

		let path = self.data_path.clone();
		let (tx, rx) = mpsc::channel();
		let spawned = thread::Builder::new()
			.name("grant-loader".into())
			.spawn(move || {
				let _ = tx.send(RecordStore::load(&path));
			});

		self.data = match spawned {
			Ok(_) => {
				tracing::debug!(path = %self.data_path.display(), "loading grant data");
				DataState::Loading(rx)
			}
			Err(error) => {
				tracing::error!(%error, "failed to spawn grant loader");
				DataState::Failed(format!("could not start loading: {error}"))
			}
		};
	}

	fn pump_data_load(&mut self) {
		let DataState::Loading(rx) = &self.data else {
			return;
		};
		let result = match rx.try_recv() {
			Ok(result) => result,
			Err(TryRecvError::Empty) => return,
			Err(TryRecvError::Disconnected) => {
				self.data = DataState::Failed("the loader stopped before finishing".into());
				return;
			}
		};

		match result {
			Ok(store) => self.install_store(store),
			Err(error) => {
				tracing::error!(%error, "grant data failed to load");
				self.data = DataState::Failed(error.to_string());
			}
		}
	}

	/// Show `store` as the session's data.
	pub(crate) fn install_store(&mut self, store: RecordStore) {
		tracing::info!(records = store.len(), "grant data ready");
		self.explorer.replace_store(store);
		self.data = DataState::Ready;
		self.reset_selection();
	}

	fn pump_search(&mut self, now: Instant) {
		if let Some(text) = self.search_debounce.poll(now) {
			self.explorer.set_search(text);
			self.reset_selection();
		}
	}

	fn clear_session(&mut self) {
		self.explorer.clear_data();
		self.data = DataState::Idle;
		self.search_input.clear();
		self.search_debounce.cancel();
		self.focus = Focus::Search;
		self.results.reset(0);
	}

	pub(crate) fn request_login(&mut self, mode: OpenMode, now: Instant) {
		if let Err(error) = self.identity.open(mode) {
			self.report_identity_error(&error, now);
		}
	}

	pub(crate) fn request_logout(&mut self, now: Instant) {
		if let Err(error) = self.identity.logout() {
			self.report_identity_error(&error, now);
		}
	}

	pub(crate) fn report_identity_error(&mut self, error: &IdentityError, now: Instant) {
		tracing::warn!(%error, "identity provider unavailable");
		self.show_notice(Notice::error("Authentication error. Please try again."), now);
	}

	pub(crate) fn show_notice(&mut self, notice: Notice, now: Instant) {
		self.notice = Some(ActiveNotice {
			notice,
			expires_at: now + NOTICE_TTL,
		});
	}

	fn expire_notice(&mut self, now: Instant) {
		if self
			.notice
			.as_ref()
			.is_some_and(|active| now >= active.expires_at)
		{
			self.notice = None;
		}
	}

	pub(crate) fn greeting(&self) -> Option<String> {
		self.gate
			.user()
			.map(|user| format!("Welcome, {}", user.display_name()))
	}
}
