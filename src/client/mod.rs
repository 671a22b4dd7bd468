pub mod envelope;
pub mod http;
pub mod http_method;
pub mod input;
pub mod invoke_models;
pub mod invoker;

pub use envelope::Envelope;
pub use invoke_models::InvokeConfig;
pub use invoker::ApiInvoker;
