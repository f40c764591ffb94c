pub mod medical_request;
pub mod medical_route;
