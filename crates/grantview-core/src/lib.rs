//! Record pipeline behind the `grantview` table explorer.
//!
//! The crate is split along the data flow: [`store`] loads the master record
//! list once, [`filter`] and [`sort`] derive index views over it, [`paginate`]
//! slices those views into pages, and [`export`] serializes a view to CSV.
//! [`explorer::Explorer`] ties the stages together for front-ends, while
//! [`identity`] gates access behind an external identity collaborator.

pub mod debounce;
pub mod error;
pub mod explorer;
pub mod export;
pub mod filter;
pub mod format;
pub mod identity;
pub mod notice;
pub mod options;
pub mod paginate;
pub mod record;
pub mod sort;
pub mod stats;
pub mod store;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::{ExportError, IdentityError, LoadError};
pub use explorer::Explorer;
pub use filter::{FilterCriteria, FilterDimension};
pub use identity::{
	AccessGate, AccessState, ConfiguredIdentity, DisabledIdentity, GateAction, GateOutcome,
	IdentityEvent, IdentityProvider, OpenMode, User,
};
pub use notice::{Notice, NoticeKind};
pub use options::FilterOptions;
pub use paginate::{PAGE_SIZE, Page};
pub use record::{Field, FieldValue, Record};
pub use sort::{SortDirection, SortSpec};
pub use stats::Stats;
pub use store::{DEFAULT_DATA_PATH, RecordStore};
