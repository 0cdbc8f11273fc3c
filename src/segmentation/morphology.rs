//! Lemma and part-of-speech stand-ins for the pipeline's language-model
//! boundary: closed-class word lists, an irregular-verb exception table, and
//! morphy-style suffix detachment checked against a verb lexicon.

use crate::core::models::Pos;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "another", "both", "either", "neither", "my", "your", "its", "our", "their",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "mine",
    "yours", "his", "hers", "ours", "theirs", "myself", "yourself", "himself", "herself",
    "itself", "ourselves", "themselves", "who", "whom", "someone", "anyone", "everyone",
    "something", "anything", "everything", "nothing", "nobody", "somebody", "everybody",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "down", "during", "for",
    "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "outside", "over",
    "past", "through", "to", "toward", "towards", "under", "until", "up", "upon", "with",
    "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "since", "whereas", "when", "whether",
];

// Surface form paired with its lemma.
const AUXILIARIES: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("be", "be"),
    ("been", "be"),
    ("being", "be"),
    ("have", "have"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("do", "do"),
    ("does", "do"),
    ("did", "do"),
    ("will", "will"),
    ("would", "would"),
    ("shall", "shall"),
    ("should", "should"),
    ("can", "can"),
    ("could", "could"),
    ("may", "may"),
    ("might", "might"),
    ("must", "must"),
    // Word segmentation keeps negative contractions whole.
    ("isn't", "be"),
    ("aren't", "be"),
    ("wasn't", "be"),
    ("weren't", "be"),
    ("don't", "do"),
    ("doesn't", "do"),
    ("didn't", "do"),
    ("won't", "will"),
    ("wouldn't", "would"),
    ("can't", "can"),
    ("couldn't", "could"),
    ("shouldn't", "should"),
    ("hasn't", "have"),
    ("haven't", "have"),
    ("hadn't", "have"),
    ("mustn't", "must"),
];

const INTERJECTIONS: &[&str] = &["oh", "ah", "hey", "wow", "ouch", "hmm", "yes"];

const ADJECTIVES: &[&str] = &[
    "happy", "sad", "big", "small", "large", "little", "old", "young", "new", "good", "bad",
    "great", "long", "short", "high", "low", "hot", "cold", "warm", "full", "empty", "open",
    "closed", "clean", "dirty", "flat", "red", "blue", "green", "black", "white", "dark",
    "light", "fast", "slow", "hard", "soft", "easy", "heavy", "tired", "hungry", "angry",
    "dead", "alive", "rich", "poor", "strong", "weak", "tall", "wide", "narrow", "deep",
    "shallow", "quick", "quiet", "loud", "smooth", "rough", "sharp", "dull", "wet", "dry",
    "sick", "healthy", "free", "busy", "ready", "safe", "dangerous", "beautiful", "ugly",
    "nice", "fine", "fresh", "awake", "asleep",
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("ate", "eat"),
    ("eaten", "eat"),
    ("went", "go"),
    ("gone", "go"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("made", "make"),
    ("said", "say"),
    ("told", "tell"),
    ("got", "get"),
    ("gotten", "get"),
    ("ran", "run"),
    ("wrote", "write"),
    ("written", "write"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("found", "find"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("sold", "sell"),
    ("paid", "pay"),
    ("held", "hold"),
    ("heard", "hear"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("sat", "sit"),
    ("stood", "stand"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("swam", "swim"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("built", "build"),
    ("broke", "break"),
    ("broken", "break"),
    ("caught", "catch"),
    ("kept", "keep"),
    ("left", "leave"),
    ("lost", "lose"),
    ("met", "meet"),
    ("sent", "send"),
    ("felt", "feel"),
    ("became", "become"),
    ("began", "begin"),
    ("begun", "begin"),
    ("slept", "sleep"),
    ("woke", "wake"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drank", "drink"),
    ("drunk", "drink"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("led", "lead"),
    ("meant", "mean"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("spent", "spend"),
    ("taught", "teach"),
    ("understood", "understand"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("won", "win"),
];

const VERB_LEMMAS: &[&str] = &[
    "answer", "ask", "bake", "become", "begin", "break", "bring", "build", "buy", "call",
    "carry", "catch", "change", "choose", "clean", "climb", "close", "come", "cook", "cry",
    "cut", "dance", "die", "drink", "drive", "drop", "eat", "fall", "feel", "fill", "find",
    "finish", "fly", "follow", "get", "give", "go", "grow", "hammer", "hate", "hear", "help",
    "hit", "hold", "hope", "jump", "keep", "kick", "kill", "kiss", "know", "laugh", "lead",
    "learn", "leave", "let", "like", "listen", "live", "look", "lose", "love", "make", "mean",
    "meet", "move", "need", "open", "paint", "pass", "pay", "place", "play", "pour", "pull",
    "push", "put", "rain", "reach", "read", "rise", "roll", "run", "say", "see", "seem",
    "sell", "send", "shout", "show", "sing", "sit", "sleep", "smile", "speak", "spend",
    "stand", "start", "stay", "stop", "study", "swim", "take", "talk", "teach", "tell",
    "think", "throw", "touch", "try", "turn", "understand", "use", "wait", "wake", "walk",
    "want", "wash", "watch", "wear", "win", "wipe", "work", "write",
];

// Checked in order; (suffix, replacement) in the classic morphy shape.
const VERB_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("es", ""),
    ("s", ""),
    ("ing", ""),
    ("ing", "e"),
    ("ed", ""),
    ("ed", "e"),
];

/// Derive the case-normalized lemma and a coarse part of speech for one
/// surface form. Total; unknown words fall back to Noun.
pub fn analyze(surface: &str) -> (String, Pos) {
    let folded = surface.to_lowercase();

    if !folded.chars().any(|c| c.is_alphanumeric()) {
        let pos = if folded.chars().all(|c| c.is_ascii_punctuation()) {
            Pos::Punctuation
        } else {
            Pos::Symbol
        };
        return (folded, pos);
    }

    if folded.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return (folded, Pos::Number);
    }

    if let Some((_, lemma)) = AUXILIARIES.iter().find(|(form, _)| *form == folded) {
        return ((*lemma).to_string(), Pos::Auxiliary);
    }
    if DETERMINERS.contains(&folded.as_str()) {
        return (folded, Pos::Determiner);
    }
    if PRONOUNS.contains(&folded.as_str()) {
        return (folded, Pos::Pronoun);
    }
    if PREPOSITIONS.contains(&folded.as_str()) {
        return (folded, Pos::Preposition);
    }
    if CONJUNCTIONS.contains(&folded.as_str()) {
        return (folded, Pos::Conjunction);
    }
    if INTERJECTIONS.contains(&folded.as_str()) {
        return (folded, Pos::Interjection);
    }
    if ADJECTIVES.contains(&folded.as_str()) {
        return (folded, Pos::Adjective);
    }

    if let Some((_, lemma)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == folded) {
        return ((*lemma).to_string(), Pos::Verb);
    }
    if VERB_LEMMAS.contains(&folded.as_str()) {
        return (folded, Pos::Verb);
    }
    if let Some(lemma) = detach_verb_suffix(&folded) {
        return (lemma, Pos::Verb);
    }

    if folded.len() > 3 && folded.ends_with("ly") {
        return (folded, Pos::Adverb);
    }
    if folded.len() > 4
        && ["ful", "ous", "ive", "less"].iter().any(|suffix| folded.ends_with(suffix))
    {
        return (folded, Pos::Adjective);
    }

    // Unknown participle-shaped forms still read as verbal so clause heads
    // are not missed; the stem is a best guess.
    if folded.len() > 5 && folded.ends_with("ing") {
        return (folded[..folded.len() - 3].to_string(), Pos::Verb);
    }

    if surface.chars().next().is_some_and(|c| c.is_uppercase()) {
        return (folded, Pos::ProperNoun);
    }

    (detach_noun_plural(&folded), Pos::Noun)
}

fn detach_verb_suffix(folded: &str) -> Option<String> {
    for (suffix, replacement) in VERB_RULES {
        let Some(stem) = folded.strip_suffix(suffix) else {
            continue;
        };

        let candidate = format!("{}{}", stem, replacement);
        if VERB_LEMMAS.contains(&candidate.as_str()) {
            return Some(candidate);
        }

        // Doubled final consonant: running -> run, stopped -> stop.
        if replacement.is_empty() && stem.len() >= 2 {
            let bytes = stem.as_bytes();
            if bytes[stem.len() - 1] == bytes[stem.len() - 2] {
                let undoubled = &stem[..stem.len() - 1];
                if VERB_LEMMAS.contains(&undoubled) {
                    return Some(undoubled.to_string());
                }
            }
        }
    }

    None
}

fn detach_noun_plural(folded: &str) -> String {
    if folded.len() > 4 && folded.ends_with("ies") {
        return format!("{}y", &folded[..folded.len() - 3]);
    }
    if folded.len() > 4
        && ["ches", "shes", "xes", "zes", "ses"].iter().any(|suffix| folded.ends_with(suffix))
    {
        return folded[..folded.len() - 2].to_string();
    }
    if folded.len() > 3
        && folded.ends_with('s')
        && !["ss", "us", "is"].iter().any(|suffix| folded.ends_with(suffix))
    {
        return folded[..folded.len() - 1].to_string();
    }

    folded.to_string()
}
