//! # Page Core
//!
//! Content model and editor state for the landing page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 page-core                   │
//! ├─────────────────────────────────────────────┤
//! │  Content Model   │  Editor Store            │
//! │  - Sections      │  - Ordered sections      │
//! │  - Elements      │  - Selection cursor      │
//! │  - Patches       │  - Revision watch        │
//! ├─────────────────────────────────────────────┤
//! │  Templates       │  Units                   │
//! │  - Default copy  │  - CSS lengths           │
//! │  - Backgrounds   │  - Colors                │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod element;
pub mod error;
pub mod section;
pub mod state;
pub mod store;
pub mod template;
pub mod units;

pub use element::{
    ButtonElement, ButtonPatch, Element, ElementId, ElementPatch, ElementType, ImageElement,
    ImagePatch, TextAlign, TextElement, TextPatch,
};
pub use error::{PageError, PageResult};
pub use section::{Section, SectionId, SectionKind, SectionPatch};
pub use state::{EditorState, Selection};
pub use store::EditorStore;
pub use template::template_for;
pub use units::{parse_px, CssLength, RgbColor};

/// Page core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
