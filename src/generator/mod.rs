//! Generator system for composing snippets into scripts
//!
//! A generator is a named procedure that receives a [`GenerationContext`] and
//! returns the generated text. Generators read configuration and snippets
//! only through the context, so their output depends on nothing else.
//!
//! # Example
//!
//! ```rust
//! use snipgen::{enclose_in_single_quotes, Codegen, GenerationContext};
//!
//! fn quick_echo(ctx: &GenerationContext) -> String {
//!     let mut out = String::from(ctx.snippet_or_empty("php_quick_echo"));
//!     out.push_str(&enclose_in_single_quotes("123-321"));
//!     out.push_str(ctx.snippet_or_empty("php_closing_tag"));
//!     out
//! }
//!
//! let mut codegen = Codegen::new();
//! codegen.add_snippet("php_quick_echo", "<?=");
//! codegen.add_snippet("php_closing_tag", "?>");
//! codegen.register_generator("qe_script", quick_echo);
//!
//! assert_eq!(codegen.generate("qe_script").unwrap(), "<?='123-321'?>");
//! ```

mod context;
mod fields;
mod registry;
mod writer;

pub use context::GenerationContext;
pub use fields::{array_line, enclose_in_single_quotes, FieldTable};
pub use registry::{GeneratorFn, GeneratorRegistry};
pub use writer::ScriptWriter;
