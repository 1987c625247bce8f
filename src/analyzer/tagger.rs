use std::collections::HashMap;

/// Coarse part-of-speech classes. Only `Verb` and `Number` drive decisions;
/// the rest exist so the lexicon can rule words out of those two classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Verb,
    Noun,
    Adjective,
    Adverb,
    Number,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Punctuation,
    Other,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
}

/// Tagging is an injected capability: the analyzer consumes whatever
/// implementation it is handed, which keeps tests free to substitute a stub.
pub trait Tagger: Send + Sync {
    fn tag(&self, sentence: &str) -> Vec<Token>;
}

/// Lexicon-backed tagger. The lexicon is built once at construction and is
/// read-only afterwards; one instance serves every analyze call in the
/// process.
pub struct LexiconTagger {
    lexicon: HashMap<&'static str, PosTag>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        let mut tagger = Self {
            lexicon: HashMap::new(),
        };

        tagger.init_verbs();
        tagger.init_numbers();
        tagger.init_function_words();

        tagger
    }

    fn init_verbs(&mut self) {
        let verbs = [
            "led", "managed", "implemented", "developed", "designed", "built",
            "created", "launched", "mentored", "conducted", "collaborated",
            "debugged", "participated", "contributed", "improved", "increased",
            "reduced", "streamlined", "automated", "coordinated", "delivered",
            "established", "authored", "maintained", "optimized", "migrated",
            "trained", "spearheaded", "organized", "resolved", "architected",
            "deployed", "refactored", "analyzed", "researched", "presented",
            "negotiated", "supervised", "oversaw", "initiated", "drove",
        ];

        for verb in verbs {
            self.lexicon.insert(verb, PosTag::Verb);
        }
    }

    fn init_numbers(&mut self) {
        let numbers = [
            "zero", "one", "two", "three", "four", "five", "six", "seven",
            "eight", "nine", "ten", "eleven", "twelve", "twenty", "thirty",
            "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
            "hundred", "hundreds", "thousand", "thousands", "million",
            "millions", "dozen", "dozens", "half", "quarter", "percent",
        ];

        for number in numbers {
            self.lexicon.insert(number, PosTag::Number);
        }
    }

    fn init_function_words(&mut self) {
        let determiners = ["a", "an", "the", "this", "that", "these", "those"];
        let pronouns = ["i", "we", "our", "my", "their", "its"];
        let prepositions = [
            "of", "in", "on", "for", "with", "by", "to", "from", "across",
            "over", "under", "through",
        ];
        let conjunctions = ["and", "or", "but", "while"];

        for word in determiners {
            self.lexicon.insert(word, PosTag::Determiner);
        }
        for word in pronouns {
            self.lexicon.insert(word, PosTag::Pronoun);
        }
        for word in prepositions {
            self.lexicon.insert(word, PosTag::Preposition);
        }
        for word in conjunctions {
            self.lexicon.insert(word, PosTag::Conjunction);
        }
    }

    fn classify(&self, word: &str) -> PosTag {
        if word.chars().any(|c| c.is_ascii_digit()) {
            return PosTag::Number;
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return *tag;
        }

        // Suffix fallback for words outside the lexicon.
        if lower.ends_with("ly") {
            PosTag::Adverb
        } else if lower.ends_with("ing") || lower.ends_with("ed") {
            PosTag::Verb
        } else {
            PosTag::Noun
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Vec<Token> {
        tokenize(sentence)
            .into_iter()
            .map(|text| {
                let tag = if text.chars().all(|c| !c.is_alphanumeric()) {
                    PosTag::Punctuation
                } else {
                    self.classify(&text)
                };
                Token { text, tag }
            })
            .collect()
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a sentence at word/punctuation boundaries. Alphanumeric runs
/// (with internal hyphens and apostrophes) form word tokens; every other
/// non-space character stands alone.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in sentence.chars() {
        if c.is_alphanumeric() || (!current.is_empty() && (c == '-' || c == '\'')) {
            current.push(c);
        } else {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
