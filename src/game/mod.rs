//! Game session control
//!
//! Contains:
//! - The round controller with bomb ticking and human takebacks
//! - The provider/observer traits at the session boundary

pub mod session;

pub use session::{ActionProvider, GameEvent, GameObserver, NullObserver, Session, UNDO_QUOTA};
