//! Annotation document parsing.
use log::debug;

use super::component::{ArgumentComponent, EssayAnnotations, Span};
use super::patterns::PATTERNS;
use super::Category;
use crate::error::Error;

/// Parse one annotation document into per-category component lists.
///
/// Spans and texts are extracted independently over the whole document,
/// so extraction order equals document order, then zipped positionally.
/// A span/text count mismatch within a category means the document is
/// corrupted and aborts the parse. Lines matching no category pattern
/// are ignored.
pub fn parse(document: &str) -> Result<EssayAnnotations, Error> {
    let mut annotations = EssayAnnotations::default();

    for category in Category::ALL {
        let patterns = &PATTERNS[&category];

        let spans = patterns
            .span()
            .captures_iter(document)
            .map(|captures| -> Result<Span, Error> {
                let start = captures[1].parse()?;
                let end = captures[2].parse()?;
                Ok(Span::new(start, end))
            })
            .collect::<Result<Vec<Span>, Error>>()?;

        let texts: Vec<String> = patterns
            .text()
            .captures_iter(document)
            .map(|captures| captures[1].to_string())
            .collect();

        if spans.len() != texts.len() {
            return Err(Error::MalformedAnnotation {
                category,
                spans: spans.len(),
                texts: texts.len(),
            });
        }

        debug!("{:?}: {} components", category, spans.len());

        let components = spans
            .into_iter()
            .zip(texts)
            .map(|(span, text)| ArgumentComponent::new(span, text))
            .collect();

        annotations.set_components(category, components);
    }

    Ok(annotations)
}

#[cfg(test)]
mod tests {
    use super::super::Span;
    use super::{parse, Category};
    use crate::error::Error;

    fn gen_document() -> &'static str {
        "T1\tMajorClaim 503 575\twe should attach more importance to cooperation during primary education\n\
         T2\tMajorClaim 2154 2231\ta more cooperative attitudes towards life is more profitable in one's success\n\
         T3\tClaim 591 714\tthrough cooperation, children can learn about interpersonal skills which are significant in the future life of all students\n\
         A1\tStance T3 For\n\
         T4\tPremise 716 851\tWhat we acquired from team work is not only how to achieve the same goal with others but more importantly, how to get along with others\n\
         T5\tPremise 887 1262\tDuring the process of cooperation, children can learn about how to listen to opinions of others\n\
         R1\tsupports Arg1:T4 Arg2:T3\n\
         R2\tsupports Arg1:T5 Arg2:T3\n"
    }

    #[test]
    fn component_counts() {
        let annotations = parse(gen_document()).unwrap();

        assert_eq!(annotations.components(Category::MajorClaim).len(), 2);
        assert_eq!(annotations.components(Category::Claim).len(), 1);
        assert_eq!(annotations.components(Category::Premise).len(), 2);
    }

    #[test]
    fn roundtrip_single_components() {
        let document = "T1\tMajorClaim 10 25\tcloning is beneficial\n\
                        T2\tClaim 30 48\tit advances medicine\n\
                        T3\tPremise 50 80\torgans could be grown on demand\n";

        let annotations = parse(document).unwrap();

        let major_claim = &annotations.components(Category::MajorClaim)[0];
        assert_eq!(major_claim.span(), &Span::new(10, 25));
        assert_eq!(major_claim.text(), "cloning is beneficial");

        let claim = &annotations.components(Category::Claim)[0];
        assert_eq!(claim.span(), &Span::new(30, 48));
        assert_eq!(claim.text(), "it advances medicine");

        let premise = &annotations.components(Category::Premise)[0];
        assert_eq!(premise.span(), &Span::new(50, 80));
        assert_eq!(premise.text(), "organs could be grown on demand");
    }

    #[test]
    fn keyword_case_insensitive() {
        let document = "T1\tMAJORCLAIM 0 5\tfirst\n\
                        T2\tmajorclaim 6 12\tsecond\n";

        let annotations = parse(document).unwrap();
        assert_eq!(annotations.components(Category::MajorClaim).len(), 2);
    }

    #[test]
    fn document_order_preserved() {
        let document = "T1\tPremise 100 120\tfirst premise\n\
                        T2\tClaim 0 20\tthe claim\n\
                        T3\tPremise 40 60\tsecond premise\n";

        let annotations = parse(document).unwrap();
        let premises = annotations.components(Category::Premise);

        assert_eq!(premises[0].text(), "first premise");
        assert_eq!(premises[1].text(), "second premise");
    }

    #[test]
    fn count_mismatch_is_error() {
        // two claim span headers, only one carries a text field
        let document = "T1\tClaim 0 10\tan actual claim\n\
                        T2\tClaim 20 30\n";

        let err = parse(document).unwrap_err();
        match err {
            Error::MalformedAnnotation {
                category,
                spans,
                texts,
            } => {
                assert_eq!(category, Category::Claim);
                assert_eq!(spans, 2);
                assert_eq!(texts, 1);
            }
            other => panic!("expected MalformedAnnotation, got {:?}", other),
        }
    }

    #[test]
    fn empty_document() {
        let annotations = parse("").unwrap();
        for category in Category::ALL {
            assert!(annotations.components(category).is_empty());
        }
    }

    #[test]
    fn unrelated_lines_ignored() {
        let document = "R1\tsupports Arg1:T4 Arg2:T3\n\
                        A1\tStance T3 Against\n\
                        # some metadata line\n";

        let annotations = parse(document).unwrap();
        for category in Category::ALL {
            assert!(annotations.components(category).is_empty());
        }
    }
}
