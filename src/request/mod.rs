//! Turning a logical call into a concrete, authenticated HTTP request.

pub mod builder;
pub mod descriptor;
pub mod options;

pub use builder::RequestBuilder;
pub use descriptor::RequestDescriptor;
pub use options::{CallOptions, ResolvedCall};
