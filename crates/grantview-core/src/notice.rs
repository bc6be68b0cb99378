/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
	Info,
	Success,
	Error,
}

/// A short, dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub message: String,
}

impl Notice {
	#[must_use]
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			kind: NoticeKind::Info,
			message: message.into(),
		}
	}

	#[must_use]
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			kind: NoticeKind::Success,
			message: message.into(),
		}
	}

	#[must_use]
	pub fn error(message: impl Into<String>) -> Self {
		Self {
			kind: NoticeKind::Error,
			message: message.into(),
		}
	}
}
