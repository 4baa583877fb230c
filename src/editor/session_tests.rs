#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{
        core::{
            Connection,
            DictionarySnapshot,
            PhraseCategory,
            ScoredItem,
            SnapshotCard,
        },
        editor::{
            graph::ConnectError,
            session::EditorSession,
        },
    };

    fn item(id: u32, text: &str, score: f32) -> ScoredItem {
        ScoredItem { id, text: text.to_string(), tfidf: score, pattern: None }
    }

    fn record(id: u32, text: &str, score: f32, category: PhraseCategory) -> SnapshotCard {
        SnapshotCard {
            id,
            text: text.to_string(),
            tfidf: score,
            pattern: None,
            phrase_type: category,
            hidden: false,
        }
    }

    /// Fresh analysis result: everything still sitting in the intake pool.
    fn intake_session() -> EditorSession {
        EditorSession::from_intake(
            vec![
                item(1, "distributed ledger", 0.9),
                item(2, "consensus", 0.9),
                item(3, "agreement protocol", 0.8),
                item(4, "byzantine fault", 0.7),
                item(5, "quorum", 0.6),
            ],
            "source text".to_string(),
        )
    }

    /// Already-sorted dictionary with no connections yet: p1 in intake, t1/t2
    /// terms, s1 synonym, d1 definition. Loading anchors on t2 (last term).
    fn populated_session() -> EditorSession {
        EditorSession::from_snapshot(DictionarySnapshot {
            id: None,
            name: String::new(),
            phrases: vec![
                record(1, "distributed ledger", 0.9, PhraseCategory::Phrase),
                record(2, "consensus", 0.9, PhraseCategory::Term),
                record(5, "quorum", 0.6, PhraseCategory::Term),
                record(3, "agreement protocol", 0.8, PhraseCategory::Synonym),
                record(4, "byzantine fault", 0.7, PhraseCategory::Definition),
            ],
            connections: Vec::new(),
            tfidf_range: 0.0,
            document_text: "source text".to_string(),
        })
    }

    #[test]
    fn connect_rejects_intake_endpoints() {
        let mut session = populated_session();

        assert_eq!(session.connect(1, 2), Err(ConnectError::IntakeEndpoint));
        assert_eq!(session.connect(2, 1), Err(ConnectError::IntakeEndpoint));
        assert!(session.edges().is_empty());
    }

    #[test]
    fn connect_rejects_same_column_and_self_loops() {
        let mut session = populated_session();

        assert_eq!(session.connect(2, 5), Err(ConnectError::SameColumn));
        assert_eq!(session.connect(3, 3), Err(ConnectError::SameColumn));
        assert!(session.edges().is_empty());
    }

    #[test]
    fn connect_rejects_duplicates_in_either_direction() {
        let mut session = populated_session();

        session.connect(2, 3).unwrap();
        assert_eq!(session.connect(2, 3), Err(ConnectError::Duplicate));
        assert_eq!(session.connect(3, 2), Err(ConnectError::Duplicate));
        assert_eq!(session.edges().len(), 1);
    }

    #[test]
    fn connect_rejects_unknown_cards_without_mutation() {
        let mut session = populated_session();

        assert_eq!(session.connect(2, 99), Err(ConnectError::UnknownCard(99)));
        assert!(session.edges().is_empty());
    }

    #[test]
    fn connect_marks_both_endpoints() {
        let mut session = populated_session();

        session.connect(2, 4).unwrap();

        assert!(session.card(2).unwrap().connected);
        assert!(session.card(4).unwrap().connected);
    }

    #[test]
    fn disconnect_clears_marks_only_without_remaining_edges() {
        let mut session = populated_session();
        session.connect(2, 3).unwrap();
        session.connect(2, 4).unwrap();
        session.connect(5, 3).unwrap();

        session.disconnect_all_for(2);

        assert!(session.edges().iter().all(|edge| !edge.touches(2)));
        assert!(!session.card(2).unwrap().connected);
        // s1 keeps its mark through the surviving edge to t2; d1 lost its last edge.
        assert!(session.card(3).unwrap().connected);
        assert!(!session.card(4).unwrap().connected);
    }

    #[test]
    fn term_definition_pairing_lifecycle() {
        let mut session = populated_session();

        session.connect(2, 4).unwrap();
        assert_eq!(session.connect(1, 2), Err(ConnectError::IntakeEndpoint));

        session.disconnect_all_for(2);

        assert!(session.edges().is_empty());
        assert!(!session.card(4).unwrap().connected);
    }

    #[test]
    fn anchor_first_and_satellites_first_yield_identical_edges() {
        let rects = HashMap::new();

        // Term placed first: satellites connect to it as they land.
        let mut anchor_first = intake_session();
        anchor_first.move_card(2, PhraseCategory::Term, 0.0, &rects).unwrap();
        anchor_first.move_card(3, PhraseCategory::Synonym, 0.0, &rects).unwrap();
        anchor_first.move_card(4, PhraseCategory::Definition, 0.0, &rects).unwrap();

        // Satellites placed first: they buffer until the term arrives, then the
        // whole pending group flushes as one batch.
        let mut satellites_first = intake_session();
        satellites_first.move_card(3, PhraseCategory::Synonym, 0.0, &rects).unwrap();
        satellites_first.move_card(4, PhraseCategory::Definition, 0.0, &rects).unwrap();
        assert!(satellites_first.edges().is_empty());
        satellites_first.move_card(2, PhraseCategory::Term, 0.0, &rects).unwrap();

        let mut forward: Vec<(u32, u32)> =
            anchor_first.edges().iter().map(|e| (e.from_id, e.to_id)).collect();
        let mut buffered: Vec<(u32, u32)> =
            satellites_first.edges().iter().map(|e| (e.from_id, e.to_id)).collect();
        forward.sort_unstable();
        buffered.sort_unstable();

        assert_eq!(forward, buffered);
        assert_eq!(forward, vec![(2, 3), (2, 4)]);
    }

    #[test]
    fn switching_anchor_refocuses_satellites() {
        let mut session = populated_session();
        session.select_card(2).unwrap();
        session.select_card(3).unwrap();

        // A second term with its own satellite takes the focus.
        session.select_card(5).unwrap();
        session.select_card(4).unwrap();

        assert_eq!(session.anchor(), Some(5));
        // s1 belongs to t1 only, so it drops out of focus; d1 is linked to the
        // current anchor and stays.
        assert!(!session.card(3).unwrap().anchor_visible);
        assert!(session.card(4).unwrap().anchor_visible);

        // Switching back flips the visibility the other way.
        session.select_card(2).unwrap();
        assert!(session.card(3).unwrap().anchor_visible);
        assert!(!session.card(4).unwrap().anchor_visible);
    }

    #[test]
    fn moving_a_card_severs_its_edges() {
        let mut session = populated_session();
        session.connect(2, 3).unwrap();
        session.connect(2, 4).unwrap();

        let rects = HashMap::new();
        session.move_card(2, PhraseCategory::Phrase, 0.0, &rects).unwrap();

        assert!(session.edges().is_empty());
        let moved = session.card(2).unwrap();
        assert_eq!(moved.category, PhraseCategory::Phrase);
        assert!(!moved.connected);
        assert!(moved.anchor_visible);
    }

    #[test]
    fn moving_the_anchor_into_intake_clears_the_anchor() {
        let mut session = populated_session();
        session.select_card(2).unwrap();

        let rects = HashMap::new();
        session.move_card(2, PhraseCategory::Phrase, 0.0, &rects).unwrap();

        assert_eq!(session.anchor(), None);
    }

    #[test]
    fn explicit_pairing_keeps_focus_on_the_current_anchor() {
        let mut session = populated_session();

        // Loading anchored on t2; pairing d1 with t1 must not hide d1.
        session.connect(2, 4).unwrap();

        assert_eq!(session.anchor(), Some(5));
        assert!(session.card(4).unwrap().anchor_visible);
    }

    #[test]
    fn removing_the_anchor_shows_satellites_of_other_terms() {
        let mut session = populated_session();
        session.connect(2, 3).unwrap();

        // Drag the anchor t2 back into intake; s1 still holds its edge to t1.
        let rects = HashMap::new();
        session.move_card(5, PhraseCategory::Phrase, 0.0, &rects).unwrap();

        assert_eq!(session.anchor(), None);
        assert!(session.card(3).unwrap().anchor_visible);
        assert_eq!(session.edges(), &[Connection::new(2, 3)]);
    }

    #[test]
    fn move_of_unknown_card_is_a_noop() {
        let mut session = populated_session();
        let before = session.card_count();

        let rects = HashMap::new();
        assert!(session.move_card(99, PhraseCategory::Term, 0.0, &rects).is_err());
        assert_eq!(session.card_count(), before);
    }

    #[test]
    fn threshold_hides_low_scores_but_keeps_edges() {
        let mut session = populated_session();
        session.connect(2, 4).unwrap();

        session.apply_threshold(0.75);

        // d1 scored 0.7 and disappears from view; t1 at 0.9 stays.
        assert!(session.card(4).unwrap().hidden);
        assert!(!session.card(2).unwrap().hidden);
        assert_eq!(session.edges().len(), 1);
        assert!(session.visible_edges().is_empty());

        session.apply_threshold(0.5);
        assert_eq!(session.visible_edges(), vec![Connection::new(2, 4)]);
    }

    #[test]
    fn connecting_before_or_after_filtering_gives_the_same_edge() {
        let mut filtered_first = populated_session();
        filtered_first.apply_threshold(0.75);
        filtered_first.connect(2, 4).unwrap();

        let mut connected_first = populated_session();
        connected_first.connect(2, 4).unwrap();
        connected_first.apply_threshold(0.75);

        assert_eq!(filtered_first.edges(), connected_first.edges());
    }

    #[test]
    fn snapshot_round_trip_preserves_cards_and_edges() {
        let mut session = populated_session();
        session.name = "protocol glossary".to_string();
        session.connect(2, 3).unwrap();
        session.connect(2, 4).unwrap();
        session.apply_threshold(0.65);

        let snapshot = session.to_snapshot();
        let restored = EditorSession::from_snapshot(snapshot.clone());

        assert_eq!(restored.name, "protocol glossary");
        assert_eq!(restored.threshold(), 0.65);
        assert_eq!(restored.source_text, "source text");
        assert_eq!(restored.card_count(), session.card_count());

        for category in PhraseCategory::ALL {
            let original: Vec<_> = session
                .cards(category)
                .iter()
                .map(|c| (c.id, c.text.clone(), c.score))
                .collect();
            let roundtripped: Vec<_> = restored
                .cards(category)
                .iter()
                .map(|c| (c.id, c.text.clone(), c.score))
                .collect();
            assert_eq!(original, roundtripped);
        }

        assert_eq!(restored.edges(), session.edges());
        assert_eq!(restored.to_snapshot().phrases.len(), snapshot.phrases.len());
    }

    #[test]
    fn snapshot_serializes_with_store_field_names() {
        let mut session = populated_session();
        session.name = "glossary".to_string();
        session.connect(2, 4).unwrap();

        let json = serde_json::to_value(session.to_snapshot()).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "glossary");
        assert_eq!(json["document_text"], "source text");
        assert_eq!(json["connections"][0]["from_id"], 2);
        assert_eq!(json["connections"][0]["to_id"], 4);
        let phrase_types: Vec<&str> = json["phrases"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["phrase_type"].as_str().unwrap())
            .collect();
        assert!(phrase_types.contains(&"phrase"));
        assert!(phrase_types.contains(&"term"));
    }

    #[test]
    fn loading_skips_connections_with_missing_endpoints() {
        let mut session = populated_session();
        session.connect(2, 3).unwrap();
        let mut snapshot = session.to_snapshot();
        snapshot.connections.push(Connection::new(2, 999));
        snapshot.connections.push(Connection::new(998, 999));

        let restored = EditorSession::from_snapshot(snapshot);

        assert_eq!(restored.edges(), &[Connection::new(2, 3)]);
    }

    #[test]
    fn loading_anchors_on_the_last_term_card() {
        let restored = EditorSession::from_snapshot(populated_session().to_snapshot());

        // Term column order is t1 then t2, so t2 takes the focus on load.
        assert_eq!(restored.anchor(), Some(5));
    }

    #[test]
    fn empty_term_column_loads_without_an_anchor() {
        let session = EditorSession::from_intake(vec![item(1, "phrase", 0.5)], String::new());
        let restored = EditorSession::from_snapshot(session.to_snapshot());

        assert_eq!(restored.anchor(), None);
    }
}
