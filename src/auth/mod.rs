pub mod session;

pub use session::{get_user_id_from_session, AuthenticatedUser, SessionUser};
