use serde::{Deserialize, Serialize};

/// Reference to an actor as supplied by a client: either a JSON number or a
/// string holding a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActorRef {
    Id(i64),
    Text(String),
}

impl ActorRef {
    /// The referenced id, if it names a valid actor identity at all.
    pub fn to_id(&self) -> Option<i32> {
        let raw = match self {
            ActorRef::Id(id) => *id,
            ActorRef::Text(text) => text.trim().parse::<i64>().ok()?,
        };
        i32::try_from(raw).ok().filter(|id| *id > 0)
    }
}

impl From<i32> for ActorRef {
    fn from(id: i32) -> Self {
        ActorRef::Id(id as i64)
    }
}

impl From<&str> for ActorRef {
    fn from(text: &str) -> Self {
        ActorRef::Text(text.to_string())
    }
}

/// How a list of actor references becomes a set of actor ids.
///
/// `BestEffort` never fails: references that are not numbers, are out of
/// range, or (once checked against the store) do not exist are dropped
/// silently. Duplicates collapse to their first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdResolution {
    #[default]
    BestEffort,
}

impl IdResolution {
    /// Candidate ids in request order, before the existence check.
    pub fn candidates(&self, refs: &[ActorRef]) -> Vec<i32> {
        match self {
            IdResolution::BestEffort => {
                let mut ids: Vec<i32> = Vec::with_capacity(refs.len());
                for id in refs.iter().filter_map(ActorRef::to_id) {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
                ids
            }
        }
    }

    /// Keep only the candidates the store knows about, preserving order.
    pub fn retain_existing(&self, candidates: Vec<i32>, existing: &[i32]) -> Vec<i32> {
        match self {
            IdResolution::BestEffort => candidates
                .into_iter()
                .filter(|id| existing.contains(id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_numeric_strings_resolve() {
        assert_eq!(ActorRef::Id(4).to_id(), Some(4));
        assert_eq!(ActorRef::from("12").to_id(), Some(12));
        assert_eq!(ActorRef::from(" 7 ").to_id(), Some(7));
    }

    #[test]
    fn unusable_references_are_dropped() {
        assert_eq!(ActorRef::from("Keanu Reeves").to_id(), None);
        assert_eq!(ActorRef::Id(0).to_id(), None);
        assert_eq!(ActorRef::Id(-3).to_id(), None);
        assert_eq!(ActorRef::Id(i64::MAX).to_id(), None);
    }

    #[test]
    fn deserializes_mixed_json_arrays() {
        let refs: Vec<ActorRef> = serde_json::from_str(r#"[1, "2", "x"]"#).unwrap();
        assert_eq!(
            refs,
            vec![ActorRef::Id(1), ActorRef::from("2"), ActorRef::from("x")]
        );
    }

    #[test]
    fn best_effort_dedupes_in_request_order() {
        let refs = vec![
            ActorRef::from("3"),
            ActorRef::Id(1),
            ActorRef::Id(3),
            ActorRef::from("nope"),
        ];
        assert_eq!(IdResolution::BestEffort.candidates(&refs), vec![3, 1]);
    }

    #[test]
    fn best_effort_drops_unknown_ids() {
        let kept = IdResolution::BestEffort.retain_existing(vec![3, 1, 99], &[1, 3]);
        assert_eq!(kept, vec![3, 1]);
    }
}
