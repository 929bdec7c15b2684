use std::sync::Arc;
use std::thread;

use poboard::{Engine, InMemoryDocumentStore, NewDocument, VoteOutcome};

// Four writers each commit exactly once, so a thread can lose the version
// race at most three times and every vote must land within the engine's
// retry bound.
const VOTERS: usize = 4;

fn seeded_engine() -> (Arc<Engine<InMemoryDocumentStore>>, String, String, String) {
    let engine = Engine::new(InMemoryDocumentStore::new());
    let fields = NewDocument {
        name: "greetings".into(),
        language_from: "en".into(),
        language_to: "es".into(),
        ..NewDocument::default()
    };
    let receipt = engine
        .import_catalog("msgid \"Hello\"\nmsgstr \"Hola\"\n", fields, "owner-1")
        .unwrap();
    let doc = engine.document(&receipt.document_id).unwrap().unwrap().data;
    let message_id = doc.messages()[0].id().to_string();
    let proposal_id = engine
        .add_proposal(&receipt.document_id, &message_id, "Buenas", "alice")
        .unwrap();
    (Arc::new(engine), receipt.document_id, message_id, proposal_id)
}

#[test]
fn concurrent_votes_by_distinct_authors_all_land() {
    let (engine, doc_id, message_id, proposal_id) = seeded_engine();

    let handles: Vec<_> = (0..VOTERS)
        .map(|i| {
            let engine = Arc::clone(&engine);
            let (doc_id, message_id, proposal_id) =
                (doc_id.clone(), message_id.clone(), proposal_id.clone());
            thread::spawn(move || {
                engine
                    .cast_vote(&doc_id, &message_id, &proposal_id, &format!("voter-{}", i))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), VoteOutcome::Recorded);
    }

    let doc = engine.document(&doc_id).unwrap().unwrap().data;
    let proposal = doc.message(&message_id).unwrap().proposal(&proposal_id).unwrap();
    assert_eq!(proposal.vote_count(), VOTERS);
}

#[test]
fn concurrent_votes_by_one_author_record_exactly_once() {
    let (engine, doc_id, message_id, proposal_id) = seeded_engine();

    let handles: Vec<_> = (0..VOTERS)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let (doc_id, message_id, proposal_id) =
                (doc_id.clone(), message_id.clone(), proposal_id.clone());
            thread::spawn(move || {
                engine
                    .cast_vote(&doc_id, &message_id, &proposal_id, "repeat-voter")
                    .unwrap()
            })
        })
        .collect();

    let outcomes: Vec<VoteOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let recorded = outcomes
        .iter()
        .filter(|o| **o == VoteOutcome::Recorded)
        .count();
    assert_eq!(recorded, 1);

    let doc = engine.document(&doc_id).unwrap().unwrap().data;
    let proposal = doc.message(&message_id).unwrap().proposal(&proposal_id).unwrap();
    assert_eq!(proposal.vote_count(), 1);
}

#[test]
fn concurrent_collaboration_requests_keep_one_record() {
    let (engine, doc_id, _, _) = seeded_engine();

    let handles: Vec<_> = (0..VOTERS)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let doc_id = doc_id.clone();
            thread::spawn(move || engine.request_collaboration(&doc_id, "eager").unwrap())
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let doc = engine.document(&doc_id).unwrap().unwrap().data;
    assert_eq!(doc.collaborations().len(), 1);
}

#[test]
fn operations_on_different_documents_do_not_contend() {
    let engine = Arc::new(Engine::new(InMemoryDocumentStore::new()));

    let handles: Vec<_> = (0..VOTERS)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let fields = NewDocument {
                    name: format!("doc-{}", i),
                    language_from: "en".into(),
                    language_to: "es".into(),
                    ..NewDocument::default()
                };
                let receipt = engine
                    .import_catalog("msgid \"Hello\"\nmsgstr \"Hola\"\n", fields, "owner-1")
                    .unwrap();
                engine.request_collaboration(&receipt.document_id, "alice").unwrap();
                receipt.document_id
            })
        })
        .collect();

    let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for id in ids {
        let doc = engine.document(&id).unwrap().unwrap().data;
        assert_eq!(doc.collaborations().len(), 1);
    }
}
