mod request;

pub use request::{Request, RequestStatus, RequestType};
