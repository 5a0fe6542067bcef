//! Provides methods to transform Mahjong Soul paifu logs into per-round
//! outcomes and per-seat statistics.
//!
//! The input is an untyped JSON tree whose field names drift between client
//! versions. Everything that knows about that drift lives in [`majsoul`] and
//! [`field`]; the rest of the crate works on typed records.
//!
//! ```
//! let log = serde_json::json!({
//!     "head": { "uuid": "240101-0000" },
//!     "actions": [
//!         { "result": { "name": ".lq.RecordNewRound", "scores": [25000, 25000, 25000, 25000] } }
//!     ]
//! });
//! let derived = paifu::derive_match(&log);
//! assert_eq!(derived.rounds.len(), 1);
//! assert_eq!(derived.parse_notes.len(), 1);
//! ```

#![deny(
    rust_2018_idioms,
    let_underscore_drop,
    clippy::uninlined_format_args,
    clippy::unseparated_literal_suffix,
    clippy::must_use_candidate,
    clippy::redundant_else,
    clippy::manual_assert,
    clippy::manual_ok_or,
    clippy::needless_for_each,
    clippy::needless_continue,
    clippy::map_unwrap_or,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::inefficient_to_string,
    clippy::let_unit_value,
    clippy::cloned_instead_of_copied,
    clippy::debug_assert_with_mut_call,
    clippy::equatable_if_let,
    clippy::explicit_into_iter_loop,
    clippy::explicit_iter_loop,
    clippy::filter_map_next,
    clippy::flat_map_option,
    clippy::implicit_clone,
    clippy::implicit_saturating_sub,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::semicolon_if_nothing_returned,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::trivially_copy_pass_by_ref,
    clippy::unneeded_field_pattern,
    clippy::unnested_or_patterns,
    clippy::useless_let_if_seq,
    clippy::mut_mut,
    clippy::nonstandard_macro_braces
)]

mod derive;
mod model;
mod note;
mod placement;

pub mod field;
pub mod final_score;
pub mod hule;
pub mod majsoul;
pub mod round;
pub mod stats;

pub use derive::{derive_match, derive_match_with, ParseError, UNKNOWN_MATCH_ID};
pub use final_score::FinalScoreResolver;
pub use model::{
    DerivedMatch, Draw, DrawKind, HuleEvent, HuleKind, PlayerIdentity, PlayerStat, RoundId,
    RoundRecord, Seat,
};
pub use note::{ParseNote, RoundBoundary};
pub use placement::competition_ranks;
