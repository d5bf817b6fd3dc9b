//! Test fixture generators for integration tests.
#![allow(dead_code)]

use case_footprint::domain::node::ResultKind;
use case_footprint::domain::schema::{AnswerRecord, QuestionRecord, ResultRecord, SchemaInput};

pub fn answer(id: u32, short: &str) -> AnswerRecord {
    AnswerRecord {
        id,
        text: format!("Answer {id}"),
        short: short.to_string(),
    }
}

pub fn question(id: u32, answers: Vec<AnswerRecord>, parents: Option<Vec<u32>>) -> QuestionRecord {
    QuestionRecord {
        id,
        text: format!("Question {id}"),
        answers,
        parent_answers: parents,
    }
}

pub fn document(id: u32, text: &str, linked: &[u32]) -> ResultRecord {
    ResultRecord {
        id,
        kind: ResultKind::Document,
        text: text.to_string(),
        linked_answers: linked.to_vec(),
    }
}

pub fn rejection(id: u32, text: &str, linked: &[u32]) -> ResultRecord {
    ResultRecord {
        id,
        kind: ResultKind::Rejection,
        text: text.to_string(),
        linked_answers: linked.to_vec(),
    }
}

/// Root question 0 offers A0 and A1, both leading to question 1, and A2, a rejection clause.
/// Question 1 offers A3 and A4, each yielding one document.
pub fn create_schema_shared_child() -> SchemaInput {
    SchemaInput::new(
        vec![
            question(
                0,
                vec![
                    answer(0, "Resident"),
                    answer(1, "Citizen abroad"),
                    answer(2, "Foreigner"),
                ],
                None,
            ),
            question(
                1,
                vec![answer(3, "Adult"), answer(4, "Minor")],
                Some(vec![0, 1]),
            ),
        ],
        vec![
            document(1, "Passport", &[3]),
            document(2, "Birth certificate", &[4]),
            rejection(1, "Only citizens and residents may apply", &[2]),
        ],
    )
}

/// Like `create_schema_shared_child`, but question 1 also offers A5, a rejection clause that
/// is reachable through both A0 and A1.
pub fn create_schema_shared_rejection() -> SchemaInput {
    let mut schema = create_schema_shared_child();
    schema.questions[1].answers.push(answer(5, "Under guardianship"));
    schema
        .results
        .push(rejection(2, "Guardians must apply instead", &[5]));
    schema
}

/// Like `create_schema_shared_child`, but question 1 also offers A5, linked to the same rejection
/// result as the root's A2.
pub fn create_schema_repeated_rejection() -> SchemaInput {
    let mut schema = create_schema_shared_child();
    schema.questions[1].answers.push(answer(5, "Under guardianship"));
    schema.results[2].linked_answers.push(5);
    schema
}

/// Two answers reach the same pair of documents in opposite order.
///
/// Question 0: A0 carries document 3 and leads to question 1; A1 carries document 1 and leads to
/// question 2. Question 1: A2 carries document 1. Question 2: A3 carries document 3.
pub fn create_schema_reordered_results() -> SchemaInput {
    SchemaInput::new(
        vec![
            question(0, vec![answer(0, "Left"), answer(1, "Right")], None),
            question(1, vec![answer(2, "Left then")], Some(vec![0])),
            question(2, vec![answer(3, "Right then")], Some(vec![1])),
        ],
        vec![
            document(1, "Form A", &[1, 2]),
            document(3, "Form C", &[0, 3]),
        ],
    )
}

/// 0 -A0-> 1 -A1-> 2 -A2-> 1: question 1 is declared as a child of its own descendant.
pub fn create_schema_with_cycle() -> SchemaInput {
    SchemaInput::new(
        vec![
            question(0, vec![answer(0, "Start")], None),
            question(1, vec![answer(1, "Go deeper")], Some(vec![0, 2])),
            question(2, vec![answer(2, "Go back")], Some(vec![1])),
        ],
        vec![],
    )
}

/// Three-level questionnaire with a rejection clause that also declares a child.
pub fn create_schema_layered() -> SchemaInput {
    SchemaInput::new(
        vec![
            question(0, vec![answer(0, "TA 1"), answer(1, "TA 2")], None),
            question(
                1,
                vec![answer(2, "TA 3"), answer(3, "TA 4"), answer(8, "TO 4")],
                Some(vec![1]),
            ),
            question(2, vec![answer(4, "TA 5"), answer(6, "TA 6")], Some(vec![3, 8])),
            question(3, vec![answer(7, "TA 7")], Some(vec![4, 6, 2])),
        ],
        vec![
            document(1, "Application form", &[0, 1]),
            document(2, "Proof of income", &[4]),
            document(3, "Employer letter", &[6]),
            rejection(1, "Income too high", &[2]),
        ],
    )
}
