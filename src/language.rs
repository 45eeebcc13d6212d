use whatlang::{detect, Lang};

/// Default confidence required before a non-English verdict is trusted.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// How much of the document the detector samples. The corpus is pre-filtered
/// to English sources, so a prefix sample is enough and keeps the stage cheap.
const SAMPLE_CHARS: usize = 10_000;

/// Outcome of language detection on a document sample.
#[derive(Debug, Clone)]
pub struct LangResult {
    pub is_english: bool,
    pub detected_lang: String,
    pub confidence: f64,
}

impl LangResult {
    fn assumed_english() -> Self {
        Self {
            is_english: true,
            detected_lang: "unknown".to_string(),
            confidence: 0.0,
        }
    }
}

/// Classify the primary language of `text` from its first 10,000 characters.
///
/// Never fails: a sample too short to classify, or a detector miss, is
/// treated as English so that borderline documents are not silently dropped.
/// Deterministic for identical input.
pub fn detect_language(text: &str, confidence_threshold: f64) -> LangResult {
    let sample: String = text.chars().take(SAMPLE_CHARS).collect();

    if sample.len() < 20 {
        return LangResult::assumed_english();
    }

    match detect(&sample) {
        Some(info) => LangResult {
            // A document only counts as non-English when the detector is both
            // sure of its verdict and the verdict is another language. Low
            // confidence on garbled OCR must not reject English material.
            is_english: info.lang() == Lang::Eng || info.confidence() < confidence_threshold,
            detected_lang: info.lang().code().to_string(),
            confidence: info.confidence(),
        },
        None => LangResult::assumed_english(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = "It was the best of times, it was the worst of times, it was the \
        age of wisdom, it was the age of foolishness, it was the epoch of belief, it was \
        the epoch of incredulity, it was the season of Light, it was the season of Darkness.";

    const FRENCH: &str = "Longtemps, je me suis couché de bonne heure. Parfois, à peine ma \
        bougie éteinte, mes yeux se fermaient si vite que je n'avais pas le temps de me dire: \
        Je m'endors. Et, une demi-heure après, la pensée qu'il était temps de chercher le \
        sommeil m'éveillait; je voulais poser le volume que je croyais avoir encore dans les \
        mains et souffler ma lumière; je n'avais pas cessé en dormant de faire des réflexions \
        sur ce que je venais de lire, mais ces réflexions avaient pris un tour un peu \
        particulier; il me semblait que j'étais moi-même ce dont parlait l'ouvrage: une \
        église, un quatuor, la rivalité de François premier et de Charles Quint. Cette \
        croyance survivait pendant quelques secondes à mon réveil; elle ne choquait pas ma \
        raison mais pesait comme des écailles sur mes yeux et les empêchait de se rendre \
        compte que le bougeoir n'était plus allumé.";

    #[test]
    fn english_prose_is_english() {
        let result = detect_language(ENGLISH, DEFAULT_CONFIDENCE_THRESHOLD);
        assert!(result.is_english);
        assert_eq!(result.detected_lang, "eng");
    }

    #[test]
    fn french_prose_is_not_english() {
        let result = detect_language(FRENCH, DEFAULT_CONFIDENCE_THRESHOLD);
        assert!(!result.is_english);
        assert_eq!(result.detected_lang, "fra");
    }

    #[test]
    fn short_sample_assumes_english() {
        let result = detect_language("Bonjour.", DEFAULT_CONFIDENCE_THRESHOLD);
        assert!(result.is_english);
        assert_eq!(result.detected_lang, "unknown");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn detection_is_deterministic() {
        let a = detect_language(FRENCH, DEFAULT_CONFIDENCE_THRESHOLD);
        let b = detect_language(FRENCH, DEFAULT_CONFIDENCE_THRESHOLD);
        assert_eq!(a.detected_lang, b.detected_lang);
        assert_eq!(a.confidence, b.confidence);
    }
}
