//! Extraction strategies, one per logical field, in priority order.
//!
//! Older clients write snake_case keys, some exporters rewrite them in
//! camelCase, and the action list has moved around between `data.data` and
//! the document root.

use crate::field::FieldPath;

// header
pub const MATCH_ID: FieldPath = FieldPath::new("match id", &["/head/uuid", "/uuid"]);
pub const START_TIME: FieldPath = FieldPath::new(
    "start time",
    &["/head/start_time", "/head/startTime", "/start_time"],
);
pub const END_TIME: FieldPath =
    FieldPath::new("end time", &["/head/end_time", "/head/endTime", "/end_time"]);
pub const RULE: FieldPath = FieldPath::new(
    "rule",
    &[
        "/head/config/detail_rule",
        "/head/config/detailRule",
        "/config/detail_rule",
    ],
);
pub const ACCOUNTS: FieldPath = FieldPath::new("accounts", &["/head/accounts", "/accounts"]);
pub const ACTIONS: FieldPath =
    FieldPath::new("actions", &["/data/data/actions", "/data/actions", "/actions"]);
pub const RECORDS: FieldPath = FieldPath::new("records", &["/records", "/data/records"]);
pub const RESULT_PLAYERS: FieldPath =
    FieldPath::new("result players", &["/head/result/players", "/result/players"]);

// account
pub const ACCOUNT_SEAT: FieldPath = FieldPath::new("account seat", &["/seat"]);
pub const ACCOUNT_NICKNAME: FieldPath = FieldPath::new("nickname", &["/nickname", "/nickName"]);
pub const ACCOUNT_ID: FieldPath = FieldPath::new("account id", &["/account_id", "/accountId"]);

// result block
pub const RESULT_SEAT: FieldPath = FieldPath::new("result seat", &["/seat"]);
pub const RESULT_POINT: FieldPath = FieldPath::new(
    "result point",
    &["/part_point_1", "/total_point", "/point"],
);

// game end record
pub const GAME_END_SCORES: FieldPath = FieldPath::new(
    "game end scores",
    &[
        "/end_scores",
        "/endScores",
        "/scores",
        "/final_scores",
        "/finalScores",
    ],
);

/// Where an action keeps its record tag and the record body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionShape {
    pub tag: &'static str,
    pub payload: &'static str,
}

pub const ACTION_SHAPES: &[ActionShape] = &[
    ActionShape {
        tag: "/result/name",
        payload: "/result",
    },
    ActionShape {
        tag: "/name",
        payload: "/data",
    },
];

// common
pub const SEAT: FieldPath = FieldPath::new("seat", &["/seat"]);

// new round
pub const ROUND_SCORES: FieldPath = FieldPath::new("round scores", &["/scores"]);
pub const DEALER: FieldPath = FieldPath::new("dealer", &["/ju", "/dealer"]);
pub const HONBA: FieldPath = FieldPath::new("honba", &["/ben", "/honba"]);
pub const RIICHI_STICKS: FieldPath =
    FieldPath::new("riichi sticks", &["/liqibang", "/riichi_sticks", "/riichiSticks"]);
pub const DORAS: FieldPath = FieldPath::new("dora indicators", &["/doras", "/dora"]);

// discard
pub const RIICHI_FLAGS: FieldPath =
    FieldPath::new("riichi flags", &["/is_liqi", "/is_wliqi", "/isLiqi", "/isWliqi"]);

// calls
pub const CALL_TYPE: FieldPath = FieldPath::new("call type", &["/type"]);
/// `type` of a `RecordChiPengGang` that is an open kan.
pub const CALL_TYPE_MINKAN: i64 = 2;

// hule
pub const HANDS: FieldPath = FieldPath::new("hands", &["/hules"]);
pub const HAND_SEAT: FieldPath = FieldPath::new("winner seat", &["/seat", "/who", "/winner_seat"]);
pub const SELF_DRAW_FLAGS: FieldPath = FieldPath::new("self draw flags", &["/zimo", "/tsumo"]);
pub const DELTA_SCORES: FieldPath =
    FieldPath::new("delta scores", &["/delta_scores", "/deltaScores"]);
pub const OLD_SCORES: FieldPath = FieldPath::new("old scores", &["/old_scores", "/oldScores"]);
pub const NEW_SCORES: FieldPath =
    FieldPath::new("new scores", &["/scores", "/new_scores", "/newScores"]);
pub const FANS: FieldPath = FieldPath::new("fans", &["/fans"]);
pub const FAN_VALUE: FieldPath = FieldPath::new("fan value", &["/val", "/value"]);
pub const HAN: FieldPath = FieldPath::new("han", &["/han", "/count"]);
pub const FU: FieldPath = FieldPath::new("fu", &["/fu"]);

// draws
pub const DRAW_DELTA_SCORES: FieldPath = FieldPath::new(
    "draw delta scores",
    &["/scores/0/delta_scores", "/delta_scores", "/deltaScores"],
);
