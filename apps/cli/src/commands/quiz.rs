//! Daily and practice quizzes.

use anyhow::{bail, Result};
use chrono::Local;
use hanci_core::types::QuizKind;
use hanci_core::{quiz, WordRecordStore};

/// Show (and optionally answer) today's quiz. The question is stable for the
/// calendar day; answering records a word-to-meaning quiz stat.
pub fn daily(store: &mut WordRecordStore, answer: Option<usize>) -> Result<()> {
    let today = Local::now().date_naive();
    let Some(quiz) = quiz::todays_quiz(store.kv(), today, store.records())? else {
        println!("no records loaded, no quiz today");
        return Ok(());
    };

    println!("今日のクイズ ({}):", quiz.generated_on);
    println!("  {}  [{}]", quiz.headword, quiz.pronunciation);
    print_options(&quiz.options);

    if let Some(n) = answer {
        let selected = option_at(&quiz.options, n)?;
        let correct = quiz.check_answer(selected);
        store.record_quiz_answer(QuizKind::WordToMeaning, correct)?;
        if correct {
            store.mark_studied(quiz.record_id)?;
            println!("正解！");
        } else {
            println!("残念。正解: {}", quiz.correct_answer);
        }
    }
    Ok(())
}

/// One practice question of the given kind; answering records the stat under
/// that kind and a correct answer marks the word studied.
pub fn practice(
    store: &mut WordRecordStore,
    kind: QuizKind,
    answer: Option<usize>,
) -> Result<()> {
    let Some(question) = quiz::practice_question(kind, store.records()) else {
        println!("not enough records for a {} quiz", kind.as_str());
        return Ok(());
    };

    println!("{}:", prompt_label(kind));
    println!("  {}", question.prompt);
    print_options(&question.options);

    if let Some(n) = answer {
        let selected = option_at(&question.options, n)?;
        let correct = question.check_answer(selected);
        store.record_quiz_answer(kind, correct)?;
        if correct {
            store.mark_studied(question.record_id)?;
            println!("正解！");
        } else {
            println!("残念。正解: {}", question.correct_answer);
        }
    }
    Ok(())
}

fn print_options(options: &[String]) {
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
}

fn option_at(options: &[String], n: usize) -> Result<&str> {
    match n.checked_sub(1).and_then(|i| options.get(i)) {
        Some(option) => Ok(option.as_str()),
        None => bail!("answer must be between 1 and {}", options.len()),
    }
}

fn prompt_label(kind: QuizKind) -> &'static str {
    match kind {
        QuizKind::MeaningToWord => "この意味の中国語は？",
        QuizKind::WordToMeaning => "この中国語の意味は？",
        QuizKind::PronunciationToWord => "この発音の中国語は？",
        QuizKind::ExampleToMeaning => "この例文の意味は？",
    }
}
