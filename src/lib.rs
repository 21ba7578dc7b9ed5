// chatmark — compose utilities for chat-flavored Markdown and narrow links.
//
// Architecture:
//   narrow expression → narrow::link → realm URL with a `#narrow/...` fragment
//   raw message content → compose::fence → backtick-fenced quote block
//   message + sender + narrow → compose → quote-and-reply body
//
// Everything here is a pure function over immutable inputs. The message
// store, the user and stream directories, and narrow construction belong to
// the caller; this crate only turns already-built values into text.

mod compose;
mod error;
pub mod model;
pub mod narrow;

pub use compose::fence::{fence_length, wrap_with_backtick_fence};
pub use compose::{inline_link, quote_and_reply, quote_and_reply_placeholder, user_mention};
pub use error::ComposeError;
pub use narrow::link::narrow_link;
