//! The only place that knows the shape of a Mahjong Soul paifu tree.

mod log;
mod record;

pub mod paths;

pub use log::{GameEnd, RawMatchLog, ResultEntry};
pub use record::{Action, Call, Discard, DrawRecord, HuleHand, HuleRecord, NewRound, RecordKind};
