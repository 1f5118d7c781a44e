pub mod key_value;
pub mod markdown;
pub mod title;

pub use key_value::{
    binding_for, parse_block, parse_bool, split_line, BlockSummary, FieldSetter, InvalidValue,
    KeyBinding, SkipReason, SkippedLine, KEY_BINDINGS,
};
pub use markdown::{fenced_blocks, find_tagged_block, normalize_content, FencedBlock};
pub use title::{find_quoted_segments, parse_title, TitleParts};
