//! Settings recognized by the line swaps plugin.

use linewise_options::validators::non_negative_int;
use linewise_options::{OptionDef, OptionDefault, TypedOptionKey};

static OPT_SWAP_UP_CLEARANCE: OptionDef = OptionDef::new(
	"swap_up_clearance",
	"Rows kept visible above the selection when swapping up",
	OptionDefault::Int(3),
)
.with_validator(non_negative_int);

static OPT_SWAP_DOWN_CLEARANCE: OptionDef = OptionDef::new(
	"swap_down_clearance",
	"Rows kept visible below the selection when swapping down",
	OptionDefault::Int(3),
)
.with_validator(non_negative_int);

static OPT_ALLOW_SMART_SWAP_UP: OptionDef = OptionDef::new(
	"allow_smart_swap_up",
	"Run smart_swap_line_up in place of swap_line_up",
	OptionDefault::Bool(false),
);

static OPT_ALLOW_SMART_SWAP_DOWN: OptionDef = OptionDef::new(
	"allow_smart_swap_down",
	"Run smart_swap_line_down in place of swap_line_down",
	OptionDefault::Bool(false),
);

/// Every line swaps setting.
pub static SCHEMA: &[&OptionDef] = &[
	&OPT_SWAP_UP_CLEARANCE,
	&OPT_SWAP_DOWN_CLEARANCE,
	&OPT_ALLOW_SMART_SWAP_UP,
	&OPT_ALLOW_SMART_SWAP_DOWN,
];

/// Typed handle for the `swap_up_clearance` option.
pub const SWAP_UP_CLEARANCE: TypedOptionKey<i64> = TypedOptionKey::new(&OPT_SWAP_UP_CLEARANCE);
/// Typed handle for the `swap_down_clearance` option.
pub const SWAP_DOWN_CLEARANCE: TypedOptionKey<i64> = TypedOptionKey::new(&OPT_SWAP_DOWN_CLEARANCE);
/// Typed handle for the `allow_smart_swap_up` option.
pub const ALLOW_SMART_SWAP_UP: TypedOptionKey<bool> = TypedOptionKey::new(&OPT_ALLOW_SMART_SWAP_UP);
/// Typed handle for the `allow_smart_swap_down` option.
pub const ALLOW_SMART_SWAP_DOWN: TypedOptionKey<bool> = TypedOptionKey::new(&OPT_ALLOW_SMART_SWAP_DOWN);
