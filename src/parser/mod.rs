//! Parsers for Obsidian-flavored markdown.

pub mod exclusions;
pub mod frontmatter;
pub mod heading;
pub mod wikilink;

pub use exclusions::{find_exclusion_ranges, is_excluded, ExclusionRange};
pub use frontmatter::{keywords_from_frontmatter, parse_frontmatter, split_frontmatter};
pub use heading::{find_heading, first_h1, parse_headings, Heading};
pub use wikilink::{format_wikilink, parse_wikilinks, Wikilink};
