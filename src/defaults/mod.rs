//! Bundled content: the default snippet catalog and generators
//!
//! The catalog targets Bitrix CMS maintenance scripts. Nothing in the core
//! depends on it; these loaders only call the public registry operations.

mod generators;
mod snippets;

pub use generators::{
    generate_ibprop_template, generate_mevent_template, generate_uf_template,
    register_default_generators, IBPROP, MEVENT, UF,
};
pub use snippets::add_default_snippets;
