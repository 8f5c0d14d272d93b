//! SEO head tags.
//!
//! | Module   | Purpose                                             |
//! |----------|-----------------------------------------------------|
//! | `tag`    | `HeadTag` model, HTML rendering, `</head>` injection |
//! | `og`     | Per-page transformer (canonical, OG, Twitter)       |
//! | `jsonld` | Schema.org `WebSite` / `Article` records            |

mod jsonld;
mod og;
mod tag;

pub use og::{PageContext, transform_head};
pub use tag::{HeadTag, inject_head, render_tags};
