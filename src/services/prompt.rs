//! Prompt construction for the remedy endpoint.
//!
//! The instruction asks the model for a bare one-line JSON document; the
//! caller-supplied term is interpolated verbatim. Callers are trusted once
//! they pass the auth gate, so no sanitization happens here.

/// Build the user-role instruction for the given diagnosis term.
pub fn build_remedy_prompt(diagnosis: &str) -> String {
    format!(
        "Generate a JSON response only without any other text, do not include any \
         newlines or backslashes. The JSON should contain an overTheCounter key with \
         one over the counter medication that can treat {diagnosis}, a homeopathy key \
         with a homeopathy treatment for the same diagnosis, a home key with a home \
         remedy for the same diagnosis, and a prescription key with a prescription \
         medication for the same diagnosis. Each of those objects should have a title \
         key representing the treatment, a description key, and a sideEffects key. \
         Finally include a diagnosis key holding an object with a description key and \
         a symptoms key, where symptoms is a comma-separated string, not an array."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_interpolates_the_diagnosis_term() {
        let prompt = build_remedy_prompt("fever");
        assert!(prompt.contains("treat fever"));
    }

    #[test]
    fn prompt_names_every_expected_key() {
        let prompt = build_remedy_prompt("migraine");
        for key in [
            "overTheCounter",
            "homeopathy",
            "home",
            "prescription",
            "diagnosis",
            "title",
            "description",
            "sideEffects",
            "symptoms",
        ] {
            assert!(prompt.contains(key), "prompt missing key {key}");
        }
    }

    #[test]
    fn prompt_is_a_single_line() {
        assert!(!build_remedy_prompt("flu").contains('\n'));
    }
}
