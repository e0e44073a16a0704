use std::fs;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogChapter};
use crate::util::sha256_hex;

mod locate;
mod matcher;
mod noise;
mod normalize;
mod pipeline;
mod split;
mod toc;
mod types;

pub use locate::locate;
pub use matcher::TextMatcher;
pub use normalize::{normalize_text, read_document};
pub use pipeline::extract_chapters;
pub use toc::{chapter_page, parse_sub_chapters};
pub use types::{Chapter, Document, SubChapter, TocEntry};

use noise::*;
use split::*;
