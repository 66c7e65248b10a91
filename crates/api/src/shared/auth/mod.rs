mod route_guards;

pub use route_guards::{protect_admin_route, protect_route, SESSION_COOKIE};
