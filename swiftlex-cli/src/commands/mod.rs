//! Command modules for the swiftlex CLI.
//!
//! Each subcommand lives in its own file; shared input handling is in
//! [`common`].

pub mod common;

pub mod by_kind;
pub mod html;
pub mod init;
pub mod tokens;

pub use by_kind::{run_by_kind, ByKindArgs};
pub use html::{run_html, HtmlArgs};
pub use init::{run_init, InitArgs};
pub use tokens::{run_tokens, TokensArgs};
