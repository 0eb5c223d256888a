//! A type-directed interpreter for built graphs.
//!
//! [`ValueCodec`] encodes, decodes and sizes [`Value`] trees against any type
//! in a [`TypeGraph`](crate::model::TypeGraph), following the same rules as
//! the emitted codecs. [`DispatchTable`] provides the request, response and
//! exception factories of an interface at runtime.

mod codec;
mod dispatch;
mod value;

pub use codec::ValueCodec;
pub use dispatch::DispatchTable;
pub use value::Value;
