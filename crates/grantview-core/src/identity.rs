//! Access gating driven by an external identity collaborator.
//!
//! The application never handles credentials. An [`IdentityProvider`] emits
//! lifecycle [`IdentityEvent`]s over a channel, and the [`AccessGate`] turns
//! them into one of three mutually exclusive [`AccessState`]s plus the data
//! action the front-end should take.

use std::sync::mpsc::Sender;

use serde::Deserialize;

use crate::error::IdentityError;
use crate::notice::Notice;

/// The signed-in account as reported by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
	pub email: String,
	#[serde(default)]
	pub full_name: Option<String>,
}

impl User {
	#[must_use]
	pub fn new(email: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			full_name: None,
		}
	}

	#[must_use]
	pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
		self.full_name = Some(name.into());
		self
	}

	/// Full name when known, email otherwise.
	#[must_use]
	pub fn display_name(&self) -> &str {
		self.full_name
			.as_deref()
			.filter(|name| !name.trim().is_empty())
			.unwrap_or(&self.email)
	}
}

/// Lifecycle events emitted by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityEvent {
	/// Provider finished starting; carries the resumed session, if any.
	Init(Option<User>),
	Login(User),
	Logout,
	Error(String),
}

/// Which of the three top-level views is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessState {
	Loading,
	LoginRequired,
	Authenticated(User),
}

/// What the front-end must do with its grant data after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
	None,
	LoadData,
	ClearData,
}

/// Result of feeding one event through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
	pub action: GateAction,
	pub notice: Option<Notice>,
}

impl GateOutcome {
	fn quiet(action: GateAction) -> Self {
		Self {
			action,
			notice: None,
		}
	}
}

/// Tracks the access state for the session.
#[derive(Debug, Clone)]
pub struct AccessGate {
	state: AccessState,
}

impl Default for AccessGate {
	fn default() -> Self {
		Self::new()
	}
}

impl AccessGate {
	#[must_use]
	pub fn new() -> Self {
		Self {
			state: AccessState::Loading,
		}
	}

	#[must_use]
	pub fn state(&self) -> &AccessState {
		&self.state
	}

	#[must_use]
	pub fn user(&self) -> Option<&User> {
		match &self.state {
			AccessState::Authenticated(user) => Some(user),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_authenticated(&self) -> bool {
		self.user().is_some()
	}

	pub fn handle(&mut self, event: IdentityEvent) -> GateOutcome {
		match event {
			IdentityEvent::Init(Some(user)) => {
				tracing::info!(email = %user.email, "resumed identity session");
				self.state = AccessState::Authenticated(user);
				GateOutcome::quiet(GateAction::LoadData)
			}
			IdentityEvent::Init(None) => {
				tracing::info!("no identity session; login required");
				self.state = AccessState::LoginRequired;
				GateOutcome::quiet(GateAction::None)
			}
			IdentityEvent::Login(user) => {
				tracing::info!(email = %user.email, "user logged in");
				let notice = Notice::success(format!("Welcome, {}!", user.display_name()));
				self.state = AccessState::Authenticated(user);
				GateOutcome {
					action: GateAction::LoadData,
					notice: Some(notice),
				}
			}
			IdentityEvent::Logout => {
				tracing::info!("user logged out");
				self.state = AccessState::LoginRequired;
				GateOutcome {
					action: GateAction::ClearData,
					notice: Some(Notice::success("Successfully logged out.")),
				}
			}
			IdentityEvent::Error(message) => {
				tracing::warn!(%message, "identity provider error");
				GateOutcome {
					action: GateAction::None,
					notice: Some(Notice::error("Authentication error. Please try again.")),
				}
			}
		}
	}
}

/// Which dialog the provider should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
	Login,
	Signup,
}

/// An external source of identity lifecycle events.
pub trait IdentityProvider {
	/// Attach the channel that receives every subsequent event.
	fn subscribe(&mut self, sink: Sender<IdentityEvent>);

	/// Start the provider; it answers with [`IdentityEvent::Init`].
	fn init(&mut self) -> Result<(), IdentityError>;

	/// Present the login or signup flow.
	fn open(&mut self, mode: OpenMode) -> Result<(), IdentityError>;

	fn logout(&mut self) -> Result<(), IdentityError>;
}

#[derive(Debug, Default)]
struct Subscriber {
	sink: Option<Sender<IdentityEvent>>,
}

impl Subscriber {
	fn emit(&self, event: IdentityEvent) -> Result<(), IdentityError> {
		let sink = self.sink.as_ref().ok_or(IdentityError::NotSubscribed)?;
		sink.send(event).map_err(|_| IdentityError::Disconnected)
	}
}

/// Provider backed by an account named in configuration.
///
/// Opening the login flow signs in as the configured account; with
/// `resume_session` the account is already signed in at start-up. Without an
/// account every login attempt reports an error.
#[derive(Debug, Default)]
pub struct ConfiguredIdentity {
	account: Option<User>,
	resume_session: bool,
	subscriber: Subscriber,
}

impl ConfiguredIdentity {
	#[must_use]
	pub fn new(account: Option<User>, resume_session: bool) -> Self {
		Self {
			account,
			resume_session,
			subscriber: Subscriber::default(),
		}
	}
}

impl IdentityProvider for ConfiguredIdentity {
	fn subscribe(&mut self, sink: Sender<IdentityEvent>) {
		self.subscriber.sink = Some(sink);
	}

	fn init(&mut self) -> Result<(), IdentityError> {
		let session = self.account.clone().filter(|_| self.resume_session);
		self.subscriber.emit(IdentityEvent::Init(session))
	}

	fn open(&mut self, mode: OpenMode) -> Result<(), IdentityError> {
		match &self.account {
			Some(user) => self.subscriber.emit(IdentityEvent::Login(user.clone())),
			None => {
				let flow = match mode {
					OpenMode::Login => "login",
					OpenMode::Signup => "signup",
				};
				self.subscriber.emit(IdentityEvent::Error(format!(
					"{flow} unavailable: no identity account is configured"
				)))
			}
		}
	}

	fn logout(&mut self) -> Result<(), IdentityError> {
		self.subscriber.emit(IdentityEvent::Logout)
	}
}

/// Provider used when access gating is switched off: a local session is
/// always signed in.
#[derive(Debug, Default)]
pub struct DisabledIdentity {
	subscriber: Subscriber,
}

impl DisabledIdentity {
	pub const LOCAL_EMAIL: &'static str = "local session";

	fn local_user() -> User {
		User::new(Self::LOCAL_EMAIL)
	}
}

impl IdentityProvider for DisabledIdentity {
	fn subscribe(&mut self, sink: Sender<IdentityEvent>) {
		self.subscriber.sink = Some(sink);
	}

	fn init(&mut self) -> Result<(), IdentityError> {
		self.subscriber.emit(IdentityEvent::Init(Some(Self::local_user())))
	}

	fn open(&mut self, _mode: OpenMode) -> Result<(), IdentityError> {
		self.subscriber.emit(IdentityEvent::Login(Self::local_user()))
	}

	fn logout(&mut self) -> Result<(), IdentityError> {
		self.subscriber.emit(IdentityEvent::Logout)
	}
}
