//! Rendering pipeline: view state in, markup strings out.
//!
//! Rendering is split into two pure stages so every business rule is
//! unit-testable without a browser:
//!
//! 1. View-model construction ([`cards::CardView`], [`page::PageView`]):
//!    date formatting, author/image/link validation, category defaulting.
//! 2. Markup serialization (`render_*` functions): string templating only,
//!    with all free text passed through [`escape::escape_html`].
//!
//! # Submodules
//!
//! - [`escape`]: HTML text escaping
//! - [`dates`]: relative/calendar date labels
//! - [`cards`]: per-article card view-model and markup
//! - [`page`]: header, tabs, list, and full-page assembly

pub mod cards;
pub mod dates;
pub mod escape;
pub mod page;
