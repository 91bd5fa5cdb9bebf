mod error;
mod sqlite_event;
mod sqlite_registration;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_event::{SqliteEventReadRepository, SqliteEventWriteRepository};
pub use sqlite_registration::SqliteRegistrationRepository;
pub use sqlite_user::SqliteUserRepository;
