// ABOUTME: Integration tests for the question and reply repositories
// ABOUTME: Covers generated keys, soft deletes, and zero-affected cardinality policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use cafe_qa::database::{QuestionRepository, ReplyRepository};
use cafe_qa::errors::CafeError;
use cafe_qa::models::{Question, Reply};
use cafe_qa::sql::{DbConnector, SqlTemplate};
use tempfile::TempDir;

fn setup() -> (TempDir, QuestionRepository, ReplyRepository) {
    let dir = tempfile::tempdir().unwrap();
    let connector = DbConnector::new(dir.path().join("cafe.db")).unwrap();
    let template = SqlTemplate::new(Arc::new(connector));
    (
        dir,
        QuestionRepository::new(template.clone()),
        ReplyRepository::new(template),
    )
}

#[test]
fn save_returns_the_generated_key_and_find_by_id_round_trips() {
    let (_dir, questions, _replies) = setup();

    let id = questions
        .save(&Question::new("title", "content", "writer"))
        .unwrap();

    let found = questions.find_by_id(id).unwrap().expect("saved question");
    assert_eq!(found.question_id, Some(id));
    assert_eq!(found.title, "title");
    assert_eq!(found.content, "content");
    assert_eq!(found.writer, "writer");
    assert!(!found.is_deleted);
}

#[test]
fn find_all_keeps_insertion_order_and_skips_soft_deleted() {
    let (_dir, questions, _replies) = setup();
    questions.save(&Question::new("title1", "c", "w")).unwrap();
    let second = questions.save(&Question::new("title2", "c", "w")).unwrap();
    questions.save(&Question::new("title3", "c", "w")).unwrap();

    questions.delete_by_id(second).unwrap();

    let all = questions.find_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "title1");
    assert_eq!(all[1].title, "title3");
}

#[test]
fn update_rewrites_all_three_fields() {
    let (_dir, questions, _replies) = setup();
    let id = questions.save(&Question::new("title", "content", "writer")).unwrap();

    questions
        .update(id, &Question::new("UpdatedTitle", "UpdatedContent", "UpdatedWriter"))
        .unwrap();

    let found = questions.find_by_id(id).unwrap().unwrap();
    assert_eq!(found.title, "UpdatedTitle");
    assert_eq!(found.content, "UpdatedContent");
    assert_eq!(found.writer, "UpdatedWriter");
}

#[test]
fn update_of_a_missing_question_is_not_found() {
    let (_dir, questions, _replies) = setup();

    let error = questions
        .update(0, &Question::new("t", "c", "w"))
        .unwrap_err();

    assert!(matches!(
        error,
        CafeError::QuestionNotFound { question_id: 0 }
    ));
}

#[test]
fn delete_soft_deletes_and_a_second_delete_is_not_found() {
    let (_dir, questions, _replies) = setup();
    let id = questions.save(&Question::new("title", "content", "writer")).unwrap();

    questions.delete_by_id(id).unwrap();
    assert!(questions.find_by_id(id).unwrap().is_none());

    let error = questions.delete_by_id(id).unwrap_err();
    assert!(matches!(error, CafeError::QuestionNotFound { .. }));
}

#[test]
fn replies_round_trip_per_question_in_insertion_order() {
    let (_dir, questions, replies) = setup();
    let question_id = questions.save(&Question::new("title", "content", "writer")).unwrap();
    let other_question = questions.save(&Question::new("other", "content", "writer")).unwrap();

    replies.save(&Reply::new(question_id, "first", "alice")).unwrap();
    replies.save(&Reply::new(other_question, "elsewhere", "carol")).unwrap();
    replies.save(&Reply::new(question_id, "second", "bob")).unwrap();

    let found = replies.find_by_question_id(question_id).unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].content, "first");
    assert_eq!(found[1].content, "second");
}

#[test]
fn delete_by_question_id_reports_how_many_replies_it_removed() {
    let (_dir, questions, replies) = setup();
    let question_id = questions.save(&Question::new("title", "content", "writer")).unwrap();
    replies.save(&Reply::new(question_id, "first", "alice")).unwrap();
    replies.save(&Reply::new(question_id, "second", "bob")).unwrap();

    let deleted = replies.delete_by_question_id(question_id).unwrap();
    assert_eq!(deleted, 2);
    assert!(replies.find_by_question_id(question_id).unwrap().is_empty());

    // No replies left: zero deleted is a normal outcome, not an error.
    assert_eq!(replies.delete_by_question_id(question_id).unwrap(), 0);
}
