//! Instruction prompt for the enhancement call.

use crate::domain::letter::LetterText;

const INSTRUCTIONS: &str = "\
Please review and professionally enhance the following Letter of Intent.
Ensure the tone is formal, clear, and confident.
Improve grammar, phrasing, and structure where necessary, but retain all the key details provided.
Do not add any placeholders like [Date] or [Your Name]. Use the information given.
The final output should be only the letter text, without any introductory or concluding remarks from you.";

/// Fence placed on its own line before and after the embedded letter.
pub const LETTER_FENCE: &str = "---";

/// Builds the prompt asking the model to polish `letter`.
///
/// The letter is embedded verbatim between two fence lines.
pub fn enhancement_prompt(letter: &LetterText) -> String {
    format!(
        "{INSTRUCTIONS}\n\nHere is the letter:\n{LETTER_FENCE}\n{}\n{LETTER_FENCE}\n",
        letter.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::letter::{render, TransactionDescription};

    fn letter() -> LetterText {
        render(&TransactionDescription::sample()).unwrap()
    }

    #[test]
    fn embeds_letter_verbatim_between_fences() {
        let letter = letter();
        let prompt = enhancement_prompt(&letter);
        let expected = format!("\n---\n{}\n---\n", letter.as_str());
        assert!(prompt.contains(&expected));
    }

    #[test]
    fn instructs_tone_grammar_and_fidelity() {
        let prompt = enhancement_prompt(&letter());
        assert!(prompt.contains("formal"));
        assert!(prompt.contains("grammar"));
        assert!(prompt.contains("retain all the key details"));
    }

    #[test]
    fn forbids_placeholders_and_commentary() {
        let prompt = enhancement_prompt(&letter());
        assert!(prompt.contains("Do not add any placeholders"));
        assert!(prompt.contains("only the letter text"));
    }

    #[test]
    fn instructions_precede_letter() {
        let letter = letter();
        let prompt = enhancement_prompt(&letter);
        let instructions_at = prompt.find("Please review").unwrap();
        let letter_at = prompt.find(letter.as_str()).unwrap();
        assert!(instructions_at < letter_at);
    }
}
