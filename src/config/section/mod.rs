//! Configuration section definitions.
//!
//! Each module corresponds to a section in `stylebust.toml`:
//!
//! | Module    | TOML Section  | Purpose                                  |
//! |-----------|---------------|------------------------------------------|
//! | `project` | `[project]`   | Project type, environment, root          |
//! | `paths`   | `[paths]`     | Sass, CSS, image and script directories  |
//! | `output`  | `[output]`    | CSS style, relative assets, comments     |
//! | `http`    | `[http]`      | Web paths and cache busting              |

mod http;
mod output;
mod paths;
mod project;

pub use http::HttpConfig;
pub use output::{OutputConfig, OutputStyle};
pub use paths::{PathsConfig, ProjectLayout};
pub use project::{Environment, ProjectSection, ProjectType};
