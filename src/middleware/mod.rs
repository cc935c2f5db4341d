mod jwt;
mod role;
mod validate;

pub use self::jwt::{AuthUser, auth_middleware};
pub use self::role::{require_retailer, require_supplier};
pub use self::validate::ValidatedJson;
