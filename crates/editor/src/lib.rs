//! Host editor surface for line-editing plugins.
//!
//! Plugins are written against the [`View`] trait and registered with a
//! [`Registry`], which dispatches commands by name, lets listeners redirect
//! top-level commands, and answers keybinding-context queries.
//!
//! [`Buffer`] is an in-memory host: a rope, a selection and a monospace
//! viewport, plus the native `swap_line_up`, `swap_line_down` and `reindent`
//! commands.

pub mod buffer;
pub mod command;
pub mod context;
pub mod registry;
pub mod view;

pub use buffer::{Buffer, Viewport};
pub use command::{CommandArgs, CommandError, CommandInvocation, TextCommand, expect_no_args};
pub use context::{ContextQuery, EventListener, QueryOperator};
pub use registry::Registry;
pub use view::{Dip, NativeCommand, View};
