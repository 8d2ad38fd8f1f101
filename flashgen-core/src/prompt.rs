use crate::{ANSWER_PREFIX, QUESTION_PREFIX};

/// How many pairs the prompt asks for. The parser keeps whatever comes back.
pub const CARDS_PER_REQUEST: usize = 5;

pub fn build_prompt(topic: &str) -> String {
    format!(
        "Generate {n} flashcard questions and answers about {topic}. \
         Put each question on its own line starting with \"{q}\" and its answer \
         on the next line starting with \"{a}\". Format each as:\n\
         {q} [question]\n\
         {a} [answer]",
        n = CARDS_PER_REQUEST,
        topic = topic.trim(),
        q = QUESTION_PREFIX,
        a = ANSWER_PREFIX,
    )
}
