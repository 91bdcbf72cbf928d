//! Platform-free core of the accordion interaction controller.
//!
//! Everything in here is pure or generic over [`Host`], so the whole
//! controller can be exercised without a browser. The WASM frontend supplies
//! the `web_sys` host; the backend uses the block model and renderer.

pub mod blocks;
pub mod controller;
pub mod host;
pub mod keyboard;
pub mod markers;
pub mod render;
pub mod state;

#[cfg(test)]
mod memory;

pub use blocks::{AccordionBlock, AccordionItemBlock, Block, IconStyle};
pub use controller::{activate, attach, attach_inserted, handle_key, AttachReport};
pub use host::{Host, Section};
pub use keyboard::{Command, FocusTarget, Key};
pub use render::Renderer;
pub use state::{apply_state, toggle, Effect, Policy, SectionState, Transition};
