//! Named custom styles and presentation-time style selection.
//!
//! - [`StyleRegistry`]: styles registered by name, each derived from a base
//!   style through a customization hook, plus a replaceable default
//! - [`StyleChoice`]: what a caller hands the presenter: the default, an
//!   included preset, a registered name or an explicit style
//!
//! Both only ever hand out copies; see the crate docs for the value-semantics
//! contract.

mod choice;
#[allow(clippy::module_inception)]
mod registry;

pub use choice::StyleChoice;
pub use registry::StyleRegistry;
