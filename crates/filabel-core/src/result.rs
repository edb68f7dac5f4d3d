//! Classification results and the shared model-response parsing routine.

/// Characters stripped from the end of a candidate line before matching.
const TRAILING: &[char] = &[' ', '.', '\t', '\n', '\r', '\0', '\u{B}'];

/// The sentinel a model emits when no label clearly applies.
const UNKNOWN: &str = "Unknown";

/// The validated outcome of one classification attempt.
///
/// `labels` holds the catalog members found in the model output, unique and
/// in first-seen order. It is empty exactly when no line matched, in which
/// case `raw` is the caller's only diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    labels: Vec<String>,
    raw: String,
}

impl ClassificationResult {
    /// Parse a raw model response against an allowed label list.
    ///
    /// The response is split on any newline convention and checked line by
    /// line: empty lines, "Unknown" in any casing, and lines not present in
    /// `allowed` are dropped without error. Matching is exact and
    /// case-sensitive after trailing whitespace and punctuation are
    /// stripped — leading punctuation or partial labels never match.
    pub fn from_response(response: &str, allowed: &[String]) -> Self {
        let raw = response.trim();
        let mut labels: Vec<String> = Vec::new();

        for line in raw.split(['\r', '\n']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let candidate = line.trim_end_matches(TRAILING);
            if candidate.eq_ignore_ascii_case(UNKNOWN) {
                continue;
            }

            if allowed.iter().any(|l| l == candidate) && !labels.iter().any(|l| l == candidate) {
                labels.push(candidate.to_string());
            }
        }

        Self {
            labels,
            raw: raw.to_string(),
        }
    }

    /// Matched labels, unique, in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The trimmed original model response.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn single_exact_match() {
        let result = ClassificationResult::from_response(
            "National ID",
            &allowed(&["National ID", "Passport"]),
        );

        assert_eq!(result.labels(), ["National ID"]);
        assert_eq!(result.raw(), "National ID");
    }

    #[test]
    fn multiple_labels_one_per_line() {
        let result = ClassificationResult::from_response(
            "Source Code\nPHP Source Code",
            &allowed(&["Source Code", "PHP Source Code"]),
        );

        assert_eq!(result.labels(), ["Source Code", "PHP Source Code"]);
    }

    #[test]
    fn unknown_yields_empty_labels_with_raw_preserved() {
        let result = ClassificationResult::from_response("Unknown", &allowed(&["Invoice"]));

        assert!(result.labels().is_empty());
        assert_eq!(result.raw(), "Unknown");
    }

    #[test]
    fn unknown_is_skipped_in_any_casing() {
        for response in ["unknown", "UNKNOWN", "uNkNoWn"] {
            let result = ClassificationResult::from_response(response, &allowed(&["Invoice"]));
            assert!(result.labels().is_empty(), "{response:?} should not match");
        }
    }

    #[test]
    fn unknown_line_is_skipped_regardless_of_position() {
        let result = ClassificationResult::from_response(
            "Unknown\nInvoice\nunknown",
            &allowed(&["Invoice"]),
        );

        assert_eq!(result.labels(), ["Invoice"]);
    }

    #[test]
    fn unlisted_lines_are_silently_dropped() {
        let result = ClassificationResult::from_response(
            "Invoice\nSomething the model made up",
            &allowed(&["Invoice"]),
        );

        assert_eq!(result.labels(), ["Invoice"]);
    }

    #[test]
    fn repeated_label_kept_once_at_first_position() {
        let result = ClassificationResult::from_response(
            "Passport\nInvoice\nPassport",
            &allowed(&["Invoice", "Passport"]),
        );

        assert_eq!(result.labels(), ["Passport", "Invoice"]);
    }

    #[test]
    fn output_order_follows_response_not_catalog() {
        let result = ClassificationResult::from_response(
            "Receipt\nInvoice",
            &allowed(&["Invoice", "Receipt"]),
        );

        assert_eq!(result.labels(), ["Receipt", "Invoice"]);
    }

    #[test]
    fn trailing_period_and_whitespace_are_stripped() {
        let result = ClassificationResult::from_response(
            "Invoice.\nPassport \t",
            &allowed(&["Invoice", "Passport"]),
        );

        assert_eq!(result.labels(), ["Invoice", "Passport"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let result = ClassificationResult::from_response("invoice", &allowed(&["Invoice"]));

        assert!(result.labels().is_empty());
    }

    #[test]
    fn leading_punctuation_never_matches() {
        let result = ClassificationResult::from_response(
            "- Invoice\n* Passport",
            &allowed(&["Invoice", "Passport"]),
        );

        assert!(result.labels().is_empty());
    }

    #[test]
    fn partial_label_never_matches() {
        let result =
            ClassificationResult::from_response("Source", &allowed(&["Source Code"]));

        assert!(result.labels().is_empty());
    }

    #[test]
    fn all_newline_conventions_are_split() {
        for response in ["Invoice\nPassport", "Invoice\r\nPassport", "Invoice\rPassport"] {
            let result =
                ClassificationResult::from_response(response, &allowed(&["Invoice", "Passport"]));
            assert_eq!(result.labels(), ["Invoice", "Passport"], "for {response:?}");
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let result = ClassificationResult::from_response(
            "\n\nInvoice\n\n  \nPassport\n",
            &allowed(&["Invoice", "Passport"]),
        );

        assert_eq!(result.labels(), ["Invoice", "Passport"]);
    }

    #[test]
    fn raw_is_trimmed_of_surrounding_whitespace() {
        let result =
            ClassificationResult::from_response("  Invoice\n", &allowed(&["Invoice"]));

        assert_eq!(result.raw(), "Invoice");
    }

    #[test]
    fn whitespace_only_response_is_unmatched() {
        let result = ClassificationResult::from_response("   \n  ", &allowed(&["Invoice"]));

        assert!(result.labels().is_empty());
        assert_eq!(result.raw(), "");
    }

    #[test]
    fn lines_drawn_from_catalog_yield_the_deduped_first_seen_subset() {
        let catalog = allowed(&["A", "B", "C", "D"]);
        let result = ClassificationResult::from_response("C\nA\nC\nB", &catalog);

        assert_eq!(result.labels(), ["C", "A", "B"]);
    }
}
