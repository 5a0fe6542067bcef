use super::paths;
use crate::field::{self, FieldPath};
use crate::{DrawKind, Seat};

use serde_json::Value;

static NULL: Value = Value::Null;

/// The record tags this crate understands. Tags are matched with or without
/// the `.lq.` protobuf package prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    NewRound,
    DiscardTile,
    ChiPengGang,
    AnGangAddGang,
    Hule,
    NoTile,
    LiuJu,
    GameEnd,
    Other,
}

impl RecordKind {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.strip_prefix(".lq.").unwrap_or(tag) {
            "RecordNewRound" => Self::NewRound,
            "RecordDiscardTile" => Self::DiscardTile,
            "RecordChiPengGang" => Self::ChiPengGang,
            "RecordAnGangAddGang" => Self::AnGangAddGang,
            "RecordHule" => Self::Hule,
            "RecordNoTile" => Self::NoTile,
            "RecordLiuJu" => Self::LiuJu,
            "RecordGameEnd" => Self::GameEnd,
            _ => Self::Other,
        }
    }
}

/// Splits a tagged record into its kind and body, trying every known
/// [`paths::ActionShape`]. Returns `None` for records without a string tag.
pub(super) fn tagged(value: &Value) -> Option<(RecordKind, &Value)> {
    paths::ACTION_SHAPES.iter().find_map(|shape| {
        let tag = value.pointer(shape.tag)?.as_str()?;
        let payload = value.pointer(shape.payload).unwrap_or(&NULL);
        Some((RecordKind::from_tag(tag), payload))
    })
}

/// One entry of the action list, already lifted out of the raw tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NewRound(NewRound),
    Discard(Discard),
    Call(Call),
    Hule(HuleRecord),
    Draw(DrawRecord),
    /// A tag this crate does not track, e.g. `RecordDealTile`.
    Ignored,
}

impl Action {
    /// Returns `None` only when the entry carries no tag at all.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let (kind, payload) = tagged(value)?;
        Some(Self::from_record(kind, payload))
    }

    #[must_use]
    pub fn from_record(kind: RecordKind, payload: &Value) -> Self {
        match kind {
            RecordKind::NewRound => Self::NewRound(NewRound::from_payload(payload)),
            RecordKind::DiscardTile => Self::Discard(Discard::from_payload(payload)),
            RecordKind::ChiPengGang | RecordKind::AnGangAddGang => {
                Self::Call(Call::from_payload(kind, payload))
            }
            RecordKind::Hule => Self::Hule(HuleRecord::from_payload(payload)),
            RecordKind::NoTile => Self::Draw(DrawRecord::from_payload(DrawKind::Exhaustive, payload)),
            RecordKind::LiuJu => Self::Draw(DrawRecord::from_payload(DrawKind::Abortive, payload)),
            RecordKind::GameEnd | RecordKind::Other => Self::Ignored,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRound {
    pub start_scores: [i32; 4],
    pub dealer: Seat,
    pub honba: u8,
    pub riichi_sticks: u8,
    pub dora_indicators: Vec<String>,
}

impl NewRound {
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let dora_indicators = match paths::DORAS.first_present(payload) {
            Some(Value::Array(doras)) => doras.iter().filter_map(field::as_string).collect(),
            Some(dora) => field::as_string(dora).into_iter().collect(),
            None => vec![],
        };

        Self {
            start_scores: paths::ROUND_SCORES
                .first_present(payload)
                .map_or([0; 4], field::normalize_score_vector),
            dealer: read(payload, paths::DEALER, field::as_seat).unwrap_or_default(),
            honba: read(payload, paths::HONBA, field::as_count).unwrap_or(0),
            riichi_sticks: read(payload, paths::RIICHI_STICKS, field::as_count).unwrap_or(0),
            dora_indicators,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discard {
    pub seat: Option<Seat>,
    /// Set for both riichi and double riichi declarations.
    pub riichi: bool,
}

impl Discard {
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            seat: read(payload, paths::SEAT, field::as_seat),
            riichi: paths::RIICHI_FLAGS.any_true(payload),
        }
    }
}

/// Chi, pon, and every kind of kan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub seat: Option<Seat>,
    pub is_kan: bool,
}

impl Call {
    #[must_use]
    pub fn from_payload(kind: RecordKind, payload: &Value) -> Self {
        let is_kan = match kind {
            RecordKind::AnGangAddGang => true,
            _ => read(payload, paths::CALL_TYPE, field::as_i64) == Some(paths::CALL_TYPE_MINKAN),
        };

        Self {
            seat: read(payload, paths::SEAT, field::as_seat),
            is_kan,
        }
    }
}

/// One winning hand inside a win record. A double ron has two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuleHand {
    pub seat: Option<Seat>,
    pub self_drawn: bool,
    pub delta_scores: Option<[i32; 4]>,
    pub old_scores: Option<[i32; 4]>,
    pub han: Option<i32>,
    pub fu: Option<i32>,
}

impl HuleHand {
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        // a fan list wins over a direct han field, even when it is empty
        let han = match paths::FANS.first_present(payload) {
            Some(Value::Array(fans)) => Some(
                fans.iter()
                    .map(|fan| read(fan, paths::FAN_VALUE, field::as_i32).unwrap_or(0))
                    .fold(0_i32, i32::saturating_add),
            ),
            _ => read(payload, paths::HAN, field::as_i32),
        };

        Self {
            seat: read(payload, paths::HAND_SEAT, field::as_seat),
            self_drawn: paths::SELF_DRAW_FLAGS.any_true(payload),
            delta_scores: read(payload, paths::DELTA_SCORES, field::score_vector_exact),
            old_scores: read(payload, paths::OLD_SCORES, score_array),
            han,
            fu: read(payload, paths::FU, field::as_i32),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuleRecord {
    pub hands: Vec<HuleHand>,
    pub delta_scores: Option<[i32; 4]>,
    pub old_scores: Option<[i32; 4]>,
    pub new_scores: Option<[i32; 4]>,
}

impl HuleRecord {
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let hands = match paths::HANDS.first_present(payload) {
            Some(Value::Array(hands)) => hands.iter().map(HuleHand::from_payload).collect(),
            _ => vec![],
        };

        Self {
            hands,
            delta_scores: read(payload, paths::DELTA_SCORES, field::score_vector_exact),
            old_scores: read(payload, paths::OLD_SCORES, score_array),
            new_scores: read(payload, paths::NEW_SCORES, score_array),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRecord {
    pub kind: DrawKind,
    pub delta_scores: Option<[i32; 4]>,
}

impl DrawRecord {
    #[must_use]
    pub fn from_payload(kind: DrawKind, payload: &Value) -> Self {
        Self {
            kind,
            delta_scores: read(payload, paths::DRAW_DELTA_SCORES, field::score_vector_exact),
        }
    }
}

#[inline]
fn read<T>(payload: &Value, path: FieldPath, f: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
    path.first_present(payload).and_then(f)
}

/// Absolute score snapshots: any array, normalized.
fn score_array(value: &Value) -> Option<[i32; 4]> {
    value.is_array().then(|| field::normalize_score_vector(value))
}

#[cfg(test)]
mod test {
    use super::*;

    use serde_json::json;

    #[test]
    fn tags() {
        assert_eq!(RecordKind::from_tag(".lq.RecordHule"), RecordKind::Hule);
        assert_eq!(RecordKind::from_tag("RecordNewRound"), RecordKind::NewRound);
        assert_eq!(RecordKind::from_tag(".lq.RecordDealTile"), RecordKind::Other);
    }

    #[test]
    fn action_shapes() {
        let nested = json!({"result": {"name": ".lq.RecordDiscardTile", "seat": 1, "is_liqi": true}});
        assert_eq!(
            Action::from_value(&nested),
            Some(Action::Discard(Discard {
                seat: Seat::new(1),
                riichi: true,
            })),
        );

        let flat = json!({"name": ".lq.RecordDiscardTile", "data": {"seat": 2, "is_wliqi": true}});
        assert_eq!(
            Action::from_value(&flat),
            Some(Action::Discard(Discard {
                seat: Seat::new(2),
                riichi: true,
            })),
        );

        assert_eq!(Action::from_value(&json!({"result": {"seat": 0}})), None);
        assert_eq!(
            Action::from_value(&json!({"result": {"name": ".lq.RecordBaBei"}})),
            Some(Action::Ignored),
        );
    }

    #[test]
    fn new_round_defaults() {
        let round = NewRound::from_payload(&json!({}));
        assert_eq!(round.start_scores, [0; 4]);
        assert_eq!(round.dealer, Seat::default());
        assert_eq!((round.honba, round.riichi_sticks), (0, 0));
        assert!(round.dora_indicators.is_empty());

        let round = NewRound::from_payload(&json!({
            "scores": [25000, 25000, 25000],
            "ju": 2,
            "ben": 1,
            "liqibang": 2,
            "dora": "5m",
        }));
        assert_eq!(round.start_scores, [25000, 25000, 25000, 0]);
        assert_eq!(round.dealer, Seat::new(2).unwrap());
        assert_eq!((round.honba, round.riichi_sticks), (1, 2));
        assert_eq!(round.dora_indicators, ["5m"]);
    }

    #[test]
    fn kans() {
        let pon = json!({"seat": 0, "type": 1});
        let minkan = json!({"seat": 0, "type": 2});
        assert!(!Call::from_payload(RecordKind::ChiPengGang, &pon).is_kan);
        assert!(Call::from_payload(RecordKind::ChiPengGang, &minkan).is_kan);
        assert!(Call::from_payload(RecordKind::AnGangAddGang, &pon).is_kan);
    }

    #[test]
    fn hand_han() {
        let hand = HuleHand::from_payload(&json!({
            "seat": 1,
            "fans": [{"id": 1, "val": 1}, {"id": 7, "val": 2}, {"id": 31}],
            "han": 99,
            "fu": 30,
        }));
        assert_eq!(hand.han, Some(3));
        assert_eq!(hand.fu, Some(30));

        let hand = HuleHand::from_payload(&json!({"who": 1, "count": 4, "tsumo": true}));
        assert_eq!(hand.seat, Seat::new(1));
        assert_eq!(hand.han, Some(4));
        assert!(hand.self_drawn);
    }
}
