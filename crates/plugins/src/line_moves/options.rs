//! Settings recognized by the line moves plugin.

use linewise_options::validators::non_negative_int;
use linewise_options::{OptionDef, OptionDefault, TypedOptionKey};

static OPT_AUTO_REINDENT: OptionDef = OptionDef::new(
	"auto_reindent",
	"Re-indent the moved lines after a smart swap",
	OptionDefault::Bool(true),
);

static OPT_MOVE_UP_CLEARANCE: OptionDef = OptionDef::new(
	"move_up_clearance",
	"Rows kept visible above the selection when moving up",
	OptionDefault::Int(3),
)
.with_validator(non_negative_int);

static OPT_MOVE_DOWN_CLEARANCE: OptionDef = OptionDef::new(
	"move_down_clearance",
	"Rows kept visible below the selection when moving down",
	OptionDefault::Int(3),
)
.with_validator(non_negative_int);

static OPT_SQUASH_WHITESPACE_ONLY_LINES: OptionDef = OptionDef::new(
	"squash_whitespace_only_lines",
	"Let attract_text remove lines holding only whitespace",
	OptionDefault::Bool(false),
);

static OPT_SMART_SWAP_UP: OptionDef = OptionDef::new(
	"smart_swap_up",
	"Run smart_swap_line_up in place of swap_line_up",
	OptionDefault::Bool(false),
);

static OPT_SMART_SWAP_DOWN: OptionDef = OptionDef::new(
	"smart_swap_down",
	"Run smart_swap_line_down in place of swap_line_down",
	OptionDefault::Bool(false),
);

/// Every line moves setting.
pub static SCHEMA: &[&OptionDef] = &[
	&OPT_AUTO_REINDENT,
	&OPT_MOVE_UP_CLEARANCE,
	&OPT_MOVE_DOWN_CLEARANCE,
	&OPT_SQUASH_WHITESPACE_ONLY_LINES,
	&OPT_SMART_SWAP_UP,
	&OPT_SMART_SWAP_DOWN,
];

/// Typed handle for the `auto_reindent` option.
pub const AUTO_REINDENT: TypedOptionKey<bool> = TypedOptionKey::new(&OPT_AUTO_REINDENT);
/// Typed handle for the `move_up_clearance` option.
pub const MOVE_UP_CLEARANCE: TypedOptionKey<i64> = TypedOptionKey::new(&OPT_MOVE_UP_CLEARANCE);
/// Typed handle for the `move_down_clearance` option.
pub const MOVE_DOWN_CLEARANCE: TypedOptionKey<i64> = TypedOptionKey::new(&OPT_MOVE_DOWN_CLEARANCE);
/// Typed handle for the `squash_whitespace_only_lines` option.
pub const SQUASH_WHITESPACE_ONLY_LINES: TypedOptionKey<bool> = TypedOptionKey::new(&OPT_SQUASH_WHITESPACE_ONLY_LINES);
/// Typed handle for the `smart_swap_up` option.
pub const SMART_SWAP_UP: TypedOptionKey<bool> = TypedOptionKey::new(&OPT_SMART_SWAP_UP);
/// Typed handle for the `smart_swap_down` option.
pub const SMART_SWAP_DOWN: TypedOptionKey<bool> = TypedOptionKey::new(&OPT_SMART_SWAP_DOWN);
