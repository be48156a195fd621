mod router;
pub use router::{SECRET_TOKEN_HEADER, router};
