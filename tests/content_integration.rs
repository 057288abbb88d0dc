// SPDX-License-Identifier: MPL-2.0
//! Loads a content tree from disk and walks it through a reading session.

use comprehension_reader::content::{self, ContentRoot, EmptyReason};
use comprehension_reader::error::ContentError;
use comprehension_reader::session::{Command, PassageBody, QuestionBody, Render, Session, View};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, contents).expect("write content file");
}

#[tokio::test]
async fn catalog_from_directory_drives_a_full_session() {
    let dir = tempdir().expect("temp dir");
    write(
        dir.path(),
        "data/manifest.json",
        r#"{"dataFiles":["data/stories.json","data/missing.json","data/pictures.json"]}"#,
    );
    write(
        dir.path(),
        "data/stories.json",
        r#"[
            {"id":"s1","title":"The Fox","source":"Aesop","type":"text",
             "content":"A fox saw grapes.\nThey were sour.",
             "questions":[
                {"questionText":"What did the fox see?","correctAnswer":"Grapes"},
                {"questionText":"How were they?","correctAnswer":"Sour"}
             ]},
            {"title":"No id","source":"Nowhere"}
        ]"#,
    );
    write(
        dir.path(),
        "data/pictures.json",
        r#"[{"id":"p1","title":"Harbour","source":"Archive","type":"picture","content":"img/harbour.png"}]"#,
    );

    let root = ContentRoot::directory(dir.path());
    let catalog = content::load(&root, "data/manifest.json")
        .await
        .expect("manifest loads");

    assert_eq!(catalog.files_requested, 3);
    assert_eq!(catalog.dropped_entries, 1);
    assert_eq!(catalog.failures.len(), 1);
    assert_eq!(catalog.failures[0].source, "data/missing.json");
    assert_eq!(catalog.empty_reason(), None);
    let ids: Vec<_> = catalog.items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["s1", "p1"]);

    let mut session = Session::new(catalog.items);
    match session.render() {
        Render::List(list) => {
            assert_eq!(list.entries.len(), 2);
            assert_eq!(list.entries[0].label, "The Fox (Aesop)");
        }
        other => panic!("expected list, got {other:?}"),
    }

    match session.dispatch(Command::Select("s1".into())) {
        Render::Reading(pane) => {
            assert_eq!(
                pane.body,
                PassageBody::Lines(vec!["A fox saw grapes.".into(), "They were sour.".into()])
            );
            assert!(pane.can_start_questions);
        }
        other => panic!("expected reading, got {other:?}"),
    }

    session.dispatch(Command::StartQuestions);
    session.dispatch(Command::RevealAnswer);
    match session.dispatch(Command::NextQuestion) {
        Render::Question(pane) => {
            assert_eq!((pane.number, pane.total), (2, 2));
            assert!(!pane.answer_revealed);
            assert!(pane.is_last);
            assert_eq!(
                pane.body,
                QuestionBody::Prompt {
                    text: "How were they?".into(),
                    answer: "Sour".into(),
                }
            );
        }
        other => panic!("expected question, got {other:?}"),
    }

    session.dispatch(Command::Finish);
    assert_eq!(session.view(), View::List);

    match session.dispatch(Command::Select("p1".into())) {
        Render::Reading(pane) => {
            assert_eq!(
                pane.body,
                PassageBody::Picture {
                    path: "img/harbour.png".into()
                }
            );
            assert!(!pane.can_start_questions);
        }
        other => panic!("expected reading, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_manifest_is_unavailable() {
    let dir = tempdir().expect("temp dir");
    let root = ContentRoot::directory(dir.path());

    let err = content::load(&root, "data/manifest.json")
        .await
        .expect_err("manifest is missing");
    assert!(matches!(err, ContentError::ManifestUnavailable(_)));
}

#[tokio::test]
async fn every_listed_file_failing_leaves_an_empty_catalog() {
    let dir = tempdir().expect("temp dir");
    write(
        dir.path(),
        "manifest.json",
        r#"{"dataFiles":["a.json","b.json"]}"#,
    );
    write(dir.path(), "a.json", "{ not json");
    write(dir.path(), "b.json", r#"{"id":"1"}"#);

    let root = ContentRoot::directory(dir.path());
    let catalog = content::load(&root, "manifest.json")
        .await
        .expect("manifest loads");

    assert!(catalog.items.is_empty());
    assert_eq!(
        catalog.empty_reason(),
        Some(EmptyReason::AllFilesFailed { failed: 2 })
    );
    assert_eq!(catalog.failures[1].reason, "JSON data is not an array.");
}
