// NOTE: Rendering Engine Rationale
//
// Why a line-producing engine (not direct printing)?
// - Renderers return Vec<String>; the caller owns the writer
// - Output is testable without capturing stdout
// - A progress indicator can be stopped before the first line is written
//
// Why omission instead of errors?
// - Lookup APIs return irregular, deeply nested, partially redundant trees
// - Every operation here is total over the decoded JSON value grammar
// - A missing or oddly-typed field drops out of the report; it never faults
// - The only structural risk is unbounded output, handled by the max-depth
//   and per-list truncation limits, not by exception paths

pub mod field;
pub mod options;
pub mod record;
pub mod sanitize;
pub mod summary;
pub mod tree;

pub use field::{generic_label, present, title_case, unwrap_wrapped};
pub use options::RenderOptions;
pub use record::{ACCOUNT_FIELDS, render_record};
pub use sanitize::sanitize;
pub use summary::summarize;
pub use tree::{MAX_DEPTH, render_at, render_tree};
