//! Client-side wiring for the web application's backend calls
//!
//! - [`config`] - Environment selection and endpoint configuration
//! - [`functions`] - Callable client that validates results

pub mod config;
pub mod functions;

pub use config::{
    BackendEndpoints, ClientConfig, EmulatorEndpoints, Environment, FirebaseConfig, HostPort,
};
pub use functions::{
    decode_authentication_result, parse_callable_response, ClientError, FunctionsClient,
};
